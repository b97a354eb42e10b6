//! Core components, types, and utilities for the jira-webhook-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Inbound event, payload, and response types.
//! - The tagged error type used when submitting tickets.

pub mod config;
pub mod error;
pub mod types;
