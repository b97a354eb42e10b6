use tracing::{debug, error, info, instrument, warn};

use crate::{
    base::{
        error::SubmitError,
        types::{HandlerResponse, InboundEvent, IssueCommentPayload, Res},
    },
    runtime::Runtime,
    service::{secrets::resolve_credentials, tracker::CreateIssueRequest},
};

/// Handle one GitHub issue comment event.
///
/// This never fails: every outcome, including internal failures, is expressed
/// as a status code and body for the event source.
#[instrument(skip_all)]
pub async fn handle_issue_comment(event: InboundEvent, runtime: &Runtime) -> HandlerResponse {
    debug!(body = ?event.body, "Received event");

    // Parse the webhook body.

    let payload = match parse_payload(&event) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("Failed to parse event body: {err}");
            return HandlerResponse::invalid_json();
        }
    };

    if !payload.is_triggered() {
        info!("No Jira command found in comment.");
        return HandlerResponse::no_action();
    }

    // Create the ticket.

    match submit_ticket(&payload, runtime).await {
        Ok(response) => response,
        Err(err) => {
            error!(kind = err.kind(), "Failed to create Jira issue: {err}");
            HandlerResponse::internal_error()
        }
    }
}

fn parse_payload(event: &InboundEvent) -> Res<IssueCommentPayload> {
    let body = event.body_text().ok_or_else(|| anyhow::anyhow!("event body is missing or not a string"))?;

    IssueCommentPayload::from_body(body)
}

#[instrument(skip_all)]
async fn submit_ticket(payload: &IssueCommentPayload, runtime: &Runtime) -> Result<HandlerResponse, SubmitError> {
    let credentials = resolve_credentials(&runtime.secrets, &runtime.config).await?;

    let request = CreateIssueRequest::task(&credentials.project_key, payload.issue_title(), payload.issue_description());
    let response = runtime.tracker.create_issue(&credentials, &request).await?;

    if response.status == 201 {
        info!("Jira issue created.");
        Ok(HandlerResponse::created())
    } else {
        warn!(status = response.status, "Jira rejected the issue; passing its response through.");
        Ok(HandlerResponse::new(response.status, response.body))
    }
}
