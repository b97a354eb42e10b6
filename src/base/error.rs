//! Failure kinds for the ticket submission path.
//!
//! Every variant collapses to the same generic `500` for the caller; the kind
//! only exists so the logs say which step broke.

use thiserror::Error;

/// Errors raised while resolving credentials or talking to the tracker.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The secret could not be fetched, decoded, or was missing a key.
    #[error("credential resolution failed: {0:#}")]
    Credential(anyhow::Error),
    /// The tracker could not be reached or its response could not be read.
    #[error("tracker request failed: {0}")]
    Network(reqwest::Error),
    /// Anything else (e.g., a tracker URL that does not parse).
    #[error("unexpected failure: {0:#}")]
    Unexpected(anyhow::Error),
}

impl SubmitError {
    /// Short, stable name of the failure kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Credential(_) => "credential",
            SubmitError::Network(_) => "network",
            SubmitError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        // Builder errors come from bad input (URL, headers), not from the wire.
        if err.is_builder() {
            SubmitError::Unexpected(err.into())
        } else {
            SubmitError::Network(err)
        }
    }
}

// Tests.
