//! Binary entry point for `jira-webhook-bot`.
//!
//! This module provides the command-line interface for jira-webhook-bot with
//! options for configuration file paths, logging verbosity, and one-shot local
//! invocation. It initializes logging and then either serves the Lambda runtime
//! loop or handles a single event from disk.

use clap::Parser;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};
use jira_webhook_bot::base::{
    config::Config,
    types::{InboundEvent, Void},
};

/// Jira-webhook-bot: turns `/jira` GitHub issue comments into Jira tickets.
///
/// Configuration comes from the `secret_name` and `region` environment
/// variables, optionally layered with a TOML file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Export spans over OTLP/HTTP (endpoint from `OTEL_EXPORTER_OTLP_ENDPOINT`).
    #[arg(long)]
    otlp: bool,
    /// Handle the event in this JSON file once and print the response, instead
    /// of serving the Lambda runtime API.
    #[arg(short, long)]
    event: Option<std::path::PathBuf>,
}

/// Main entry point for the jira-webhook-bot binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the bot.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.
    // CloudWatch stamps and stores every line, so no time or colors.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    // Prepare the otlp layer.

    let otel = if args.otlp {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("jira-webhook-bot");

        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).init();

    let config = Config::load(args.config.as_deref())?;

    match args.event {
        Some(path) => {
            let raw = tokio::fs::read_to_string(&path).await?;
            let event: InboundEvent = serde_json::from_str(&raw)?;

            let response = jira_webhook_bot::invoke_once(config, event).await?;

            println!("{}", serde_json::to_string_pretty(&response)?);

            Ok(())
        }
        None => jira_webhook_bot::start(config).await,
    }
}
