//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the jira-webhook-bot:
//! - Secret stores (e.g., AWS Secrets Manager)
//! - Issue trackers (e.g., Jira)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod secrets;
pub mod tracker;
