//! AWS Secrets Manager implementation of the secret store.

use std::sync::Arc;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::{config::Region, error::DisplayErrorContext};
use tracing::{info, instrument};

use crate::base::{config::Config, types::Res};

use super::{GenericSecretStore, SecretClient};

// Extra methods on `SecretClient` applied by the AWS implementation.

impl SecretClient {
    pub async fn aws(config: &Config) -> Self {
        let client = AwsSecretStore::new(config).await;
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// AWS Secrets Manager client implementation.
#[derive(Clone)]
pub struct AwsSecretStore {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretStore {
    /// Create a new Secrets Manager client bound to the configured region.
    #[instrument(name = "AwsSecretStore::new", skip_all, fields(region = %config.region))]
    pub async fn new(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone())).load().await;

        info!("Secrets Manager client initialized.");

        Self {
            client: aws_sdk_secretsmanager::Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl GenericSecretStore for AwsSecretStore {
    #[instrument(name = "AwsSecretStore::get_secret_string", skip(self))]
    async fn get_secret_string(&self, secret_id: &str) -> Res<String> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|err| anyhow::anyhow!("failed to fetch secret `{secret_id}`: {}", DisplayErrorContext(&err)))?;

        output.secret_string().map(str::to_string).ok_or_else(|| anyhow::anyhow!("secret `{secret_id}` has no string value"))
    }
}
