//! Shared result aliases and the request-scoped values passed between steps.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error type used for plumbing throughout the crate.
pub type Err = anyhow::Error;
/// Result alias over [`Err`].
pub type Res<T> = Result<T, Err>;
/// Result alias for operations with no value.
pub type Void = Res<()>;

// Constants.

/// The token that, anywhere in a comment, asks for a ticket.
pub const TRIGGER_TOKEN: &str = "/jira";

/// Issue type used for every created ticket.
pub const ISSUE_TYPE: &str = "Task";

/// Summary used when the issue has no usable title.
pub const DEFAULT_ISSUE_TITLE: &str = "No title provided";
/// Description used when the issue has no usable body.
pub const DEFAULT_ISSUE_DESCRIPTION: &str = "No description provided";

/// Body returned when the comment does not ask for a ticket.
pub const BODY_NO_ACTION: &str = "No action needed";
/// Body returned when the event body is not JSON.
pub const BODY_INVALID_JSON: &str = "Invalid JSON in request body";
/// Body returned when the tracker created the ticket.
pub const BODY_CREATED: &str = "Jira issue created successfully";
/// Body returned for every internal failure.
pub const BODY_INTERNAL_ERROR: &str = "Internal Server Error";

// Inbound.

/// The invocation event as delivered by the function URL / API gateway.
///
/// Only `body` matters; every other field on the proxy event is ignored. The
/// body is kept as a raw value so that a non-string body reaches the handler
/// (and becomes a `400`) instead of failing in the runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundEvent {
    /// JSON text of the GitHub webhook; anything but a string is malformed.
    #[serde(default)]
    pub body: Option<Value>,
}

impl InboundEvent {
    /// Wrap a raw webhook body.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: Some(Value::String(body.into())) }
    }

    /// The body text, if the event carries a string body.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_ref().and_then(Value::as_str)
    }
}

/// The parts of a GitHub `issue_comment` webhook that the bot reads.
///
/// Fields are looked up leniently: a missing, null, or wrongly typed field
/// takes its default rather than failing the whole payload.
#[derive(Debug, Clone, Default)]
pub struct IssueCommentPayload {
    raw: Value,
}

impl IssueCommentPayload {
    /// Parse the payload out of a raw event body; fails only on invalid JSON.
    pub fn from_body(body: &str) -> Res<Self> {
        Ok(Self { raw: serde_json::from_str(body)? })
    }

    fn text_at(&self, object: &str, field: &str) -> Option<&str> {
        self.raw.get(object).and_then(|o| o.get(field)).and_then(Value::as_str)
    }

    /// The comment text, or empty when absent.
    pub fn comment_text(&self) -> &str {
        self.text_at("comment", "body").unwrap_or_default()
    }

    /// Whether the comment asks for a ticket.
    pub fn is_triggered(&self) -> bool {
        self.comment_text().contains(TRIGGER_TOKEN)
    }

    /// The issue title, or the placeholder when it is not a string.
    pub fn issue_title(&self) -> &str {
        self.text_at("issue", "title").unwrap_or(DEFAULT_ISSUE_TITLE)
    }

    /// The issue body, or the placeholder when it is not a string.
    pub fn issue_description(&self) -> &str {
        self.text_at("issue", "body").unwrap_or(DEFAULT_ISSUE_DESCRIPTION)
    }
}

// Credentials.

/// Tracker credentials as stored in the secret store.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TrackerCredentials {
    /// Full issue-creation endpoint (`JIRA_URL`).
    #[serde(rename = "JIRA_URL")]
    pub url: String,
    /// Account email used for basic auth (`JIRA_EMAIL`).
    #[serde(rename = "JIRA_EMAIL")]
    pub email: String,
    /// API token used for basic auth (`JIRA_API_TOKEN`).
    #[serde(rename = "JIRA_API_TOKEN")]
    pub api_token: String,
    /// Project that receives new tickets (`JIRA_PROJECT_KEY`).
    #[serde(rename = "JIRA_PROJECT_KEY")]
    pub project_key: String,
}

impl fmt::Debug for TrackerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerCredentials")
            .field("url", &self.url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .finish()
    }
}

// Outbound.

/// The handler's reply to the event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    /// HTTP status code for the event source.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Plain body text, or the tracker's raw body when passed through.
    pub body: String,
}

impl HandlerResponse {
    /// A response with an arbitrary status and body.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self { status_code, body: body.into() }
    }

    /// `200`: the comment did not ask for a ticket.
    pub fn no_action() -> Self {
        Self::new(200, BODY_NO_ACTION)
    }

    /// `201`: the tracker created the ticket.
    pub fn created() -> Self {
        Self::new(201, BODY_CREATED)
    }

    /// `400`: the event body is missing or not JSON.
    pub fn invalid_json() -> Self {
        Self::new(400, BODY_INVALID_JSON)
    }

    /// `500`: any credential, network, or unexpected failure.
    pub fn internal_error() -> Self {
        Self::new(500, BODY_INTERNAL_ERROR)
    }
}

// Tests.
