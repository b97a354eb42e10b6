//! Event handling for jira-webhook-bot.
//!
//! This module turns an inbound webhook event into a handler response:
//! - Parsing the GitHub issue comment payload
//! - Checking the comment for the trigger token
//! - Coordinating credential resolution and ticket creation

pub mod issue_comment;
