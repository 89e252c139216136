//! Runnerscope
//!
//! GitHub Action that lists the runners of an organization's default
//! runner group and publishes their names grouped by operating system.
//!
//! Architecture:
//! - Configuration: API connection settings from flags or environment
//! - Actions: input and output adapters for the Actions runner
//! - Services: inventory access and the classification pipeline
//!
//! Logs go to stderr; stdout is reserved for workflow commands.

mod actions;
mod config;
mod service;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::actions::{ActionInputs, ActionOutputs, OutputSink};
use crate::config::Config;
use crate::service::{GithubConnector, run_and_report};

#[derive(Parser)]
#[command(name = "runnerscope", version)]
#[command(about = "List organization runners grouped by operating system", long_about = None)]
struct Cli {
    /// REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = runnerscope_client::DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "RUNNERSCOPE_TIMEOUT")]
    timeout_secs: Option<u64>,

    /// User-Agent sent with every request
    #[arg(long, env = "RUNNERSCOPE_USER_AGENT")]
    user_agent: Option<String>,

    /// File step outputs are appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_file: Option<PathBuf>,

    /// Organization to query (overrides INPUT_ORGANIZATION)
    #[arg(long)]
    organization: Option<String>,

    /// Access token (overrides INPUT_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Regular expression runner names must match (overrides INPUT_FILTER)
    #[arg(long)]
    filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runnerscope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            let message = e.to_string();
            return Ok(fail_bootstrap(
                &mut ActionOutputs::stdout(None),
                message.trim(),
            ));
        }
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            return Ok(fail_bootstrap(
                &mut ActionOutputs::stdout(None),
                &format!("Invalid configuration: {}", e),
            ));
        }
    };
    info!("Using API at {}", config.api_url);

    let inputs = ActionInputs::from_env()
        .with_override("organization", cli.organization)
        .with_override("token", cli.token)
        .with_override("filter", cli.filter);
    let mut outputs = ActionOutputs::stdout(config.output_file.clone());
    let connector = GithubConnector::new(config);

    match run_and_report(&inputs, &connector, &mut outputs).await {
        Ok(report) => info!(
            "Done: {} group(s), {} of {} runner(s) published",
            report.groups, report.matched, report.runners
        ),
        Err(e) if e.is_configuration() => warn!("Check the action inputs"),
        Err(_) => {}
    }

    Ok(if outputs.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Builds and validates the configuration from command-line arguments
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::new(cli.api_url.clone())
        .with_timeout_secs(cli.timeout_secs)
        .with_output_file(cli.output_file.clone());
    if let Some(user_agent) = &cli.user_agent {
        config.user_agent = user_agent.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Reports a failure that happened before the run started
fn fail_bootstrap(sink: &mut dyn OutputSink, message: &str) -> ExitCode {
    error!("{}", message);
    if let Err(e) = sink.set_failed(message) {
        error!("Failed to report failure: {}", e);
    }
    ExitCode::FAILURE
}
