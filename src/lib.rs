//! Library root for `jira-webhook-bot`.
//!
//! Jira-webhook-bot is a small AWS Lambda handler for GitHub issue comment webhooks:
//! - Looks for the `/jira` trigger anywhere in the comment text
//! - Fetches Jira credentials from AWS Secrets Manager on every invocation
//! - Creates a `Task` from the issue title and body
//! - Passes Jira's own answer through when it refuses the ticket
//!
//! The secret store and the tracker each sit behind a trait so either can be
//! swapped out or mocked.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{
    config::Config,
    types::{HandlerResponse, InboundEvent, Res, Void},
};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up the service clients and serves events from the Lambda runtime API.
pub async fn start(config: Config) -> Void {
    info!("Starting jira-webhook-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}

/// Handle a single event outside of Lambda and return the response.
pub async fn invoke_once(config: Config, event: InboundEvent) -> Res<HandlerResponse> {
    info!("Invoking jira-webhook-bot once ...");

    let runtime = runtime::Runtime::new(config).await?;

    Ok(runtime.invoke(event).await)
}
