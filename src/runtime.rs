//! Runtime services and shared state for the jira-webhook-bot.

use lambda_runtime::{LambdaEvent, service_fn};
use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{HandlerResponse, InboundEvent, Res, Void},
    },
    interaction::issue_comment::handle_issue_comment,
    service::{secrets::SecretClient, tracker::TrackerClient},
};

/// Runtime service context that can be shared across invocations.
///
/// This struct holds the configuration and the service clients. It is designed
/// to be trivially cloneable, allowing it to be passed around without the need
/// for `Arc` or `Mutex`. The clients are connection handles only; credentials
/// are resolved anew on every invocation.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The secret store client instance.
    pub secrets: SecretClient,
    /// The issue tracker client instance.
    pub tracker: TrackerClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the secret store client.
        let secrets = SecretClient::aws(&config).await;

        // Initialize the tracker client.
        let tracker = TrackerClient::jira()?;

        Ok(Self { config, secrets, tracker })
    }

    /// Handle a single event.
    pub async fn invoke(&self, event: InboundEvent) -> HandlerResponse {
        handle_issue_comment(event, self).await
    }

    /// Serve events from the Lambda runtime API until the process is stopped.
    pub async fn start(&self) -> Void {
        info!("Waiting for events ...");

        let runtime = self.clone();

        lambda_runtime::run(service_fn(move |event: LambdaEvent<InboundEvent>| {
            let runtime = runtime.clone();

            async move { Ok::<_, lambda_runtime::Error>(runtime.invoke(event.payload).await) }
        }))
        .await
        .map_err(|err| anyhow::anyhow!("Lambda runtime stopped: {err}"))
    }
}
