//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use tracing::warn;

use super::types::{Res, Void};

/// Configuration for the jira-webhook-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared, immutable settings.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Settings read from the environment and the optional config file.
///
/// Missing values load as empty; they are checked when credentials are
/// resolved, so a misconfigured function still answers every event.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConfigInner {
    /// Name of the secret holding the tracker credentials (`secret_name`).
    pub secret_name: String,
    /// Region of the secret store (`region`).
    pub region: String,
}

impl ConfigInner {
    /// Ensure the required values are present.
    pub fn validate(&self) -> Void {
        if self.secret_name.trim().is_empty() {
            return Err(anyhow::anyhow!("`secret_name` must be set."));
        }

        if self.region.trim().is_empty() {
            return Err(anyhow::anyhow!("`region` must be set."));
        }

        Ok(())
    }
}

impl Config {
    /// Load from the environment, layered with `explicit_path` or `.hidden/config.toml`.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        // The function's environment uses bare lowercase names, so no prefix here.
        let mut cfg = config::Config::builder().add_source(config::Environment::default());

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if let Err(err) = result.validate() {
            warn!("Configuration is incomplete; ticket creation will fail: {err}");
        }

        Ok(result)
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config(secret_name: &str, region: &str) -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                secret_name: secret_name.to_string(),
                region: region.to_string(),
            }),
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(create_test_config("jira/credentials", "us-east-1").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_values() {
        assert!(create_test_config("", "us-east-1").validate().is_err());
        assert!(create_test_config("jira/credentials", "  ").validate().is_err());
    }

    #[test]
    fn test_missing_values_load_as_empty() {
        let inner: ConfigInner = serde_json::from_str("{}").unwrap();

        assert!(inner.secret_name.is_empty());
        assert!(inner.region.is_empty());
        assert!(inner.validate().is_err());
    }

    #[test]
    fn test_deref_reaches_inner() {
        let config = create_test_config("jira/credentials", "eu-west-1");

        assert_eq!(config.region, "eu-west-1");
    }
}
