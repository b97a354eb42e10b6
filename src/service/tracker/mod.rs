//! Issue tracker integration.
//!
//! The `GenericTrackerClient` trait creates a single ticket and reports the
//! tracker's raw answer, leaving the status mapping to the caller.

pub mod jira;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::Serialize;

use crate::base::{
    error::SubmitError,
    types::{ISSUE_TYPE, TrackerCredentials},
};

// Types.

/// Issue-creation body in the shape the Jira REST API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIssueRequest {
    pub fields: CreateIssueFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: String,
    #[serde(rename = "issuetype")]
    pub issue_type: IssueTypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTypeRef {
    pub name: String,
}

impl CreateIssueRequest {
    /// Build a `Task` in the given project.
    pub fn task(project_key: &str, summary: &str, description: &str) -> Self {
        Self {
            fields: CreateIssueFields {
                project: ProjectRef { key: project_key.to_string() },
                summary: summary.to_string(),
                description: description.to_string(),
                issue_type: IssueTypeRef { name: ISSUE_TYPE.to_string() },
            },
        }
    }
}

/// What the tracker answered, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerResponse {
    pub status: u16,
    pub body: String,
}

// Traits.

/// Generic issue tracker trait that clients must implement.
#[async_trait]
pub trait GenericTrackerClient: Send + Sync + 'static {
    /// Send one issue-creation request.
    ///
    /// Any HTTP answer, including error statuses, is an `Ok`; only failing to
    /// get an answer at all is an `Err`.
    async fn create_issue(&self, credentials: &TrackerCredentials, request: &CreateIssueRequest) -> Result<TrackerResponse, SubmitError>;
}

// Structs.

/// Tracker client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct TrackerClient {
    inner: Arc<dyn GenericTrackerClient>,
}

impl Deref for TrackerClient {
    type Target = dyn GenericTrackerClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl TrackerClient {
    pub fn new(inner: Arc<dyn GenericTrackerClient>) -> Self {
        Self { inner }
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_task_request_shape() {
        let request = CreateIssueRequest::task("OPS", "Bug", "desc");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "fields": {
                    "project": { "key": "OPS" },
                    "summary": "Bug",
                    "description": "desc",
                    "issuetype": { "name": "Task" }
                }
            })
        );
    }
}
