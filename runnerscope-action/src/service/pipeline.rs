//! Inventory pipeline
//!
//! Resolves inputs, fetches the default runner group(s) and publishes the
//! runner names grouped by operating system.

use std::io;

use runnerscope_client::ClientError;
use runnerscope_core::{Classification, NameFilter};
use thiserror::Error;
use tracing::{error, info, warn};

use super::InventoryConnector;
use crate::actions::{InputSource, OutputSink};

/// Reasons a run fails
///
/// The `Display` text of each variant is the failure message reported to
/// the host.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("No organization passed to the action")]
    MissingOrganization,

    #[error("No access token passed to the action")]
    MissingToken,

    #[error("Invalid filter pattern: {0}")]
    InvalidFilter(#[from] regex::Error),

    #[error("{}", .0.message())]
    Api(#[from] ClientError),

    #[error("Failed to encode outputs: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to publish outputs: {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    /// Whether the run failed before any request was made
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RunError::MissingOrganization | RunError::MissingToken | RunError::InvalidFilter(_)
        )
    }
}

/// Validated inputs of a run
pub struct RunInputs {
    pub organization: String,
    pub token: String,
    pub filter: Option<NameFilter>,
}

impl std::fmt::Debug for RunInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunInputs")
            .field("organization", &self.organization)
            .field("filter", &self.filter.as_ref().map(NameFilter::as_str))
            .finish_non_exhaustive()
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Default groups processed
    pub groups: usize,
    /// Runners fetched across those groups
    pub runners: usize,
    /// Runners that passed the filter
    pub matched: usize,
}

/// Reads and validates the run inputs
///
/// Checks organization, then token, then compiles the filter; the first
/// failure is returned.
pub fn resolve_inputs(source: &dyn InputSource) -> Result<RunInputs, RunError> {
    let organization = source
        .get("organization")
        .ok_or(RunError::MissingOrganization)?;
    let token = source.get("token").ok_or(RunError::MissingToken)?;
    let filter = source
        .get("filter")
        .map(|pattern| NameFilter::new(&pattern))
        .transpose()?;

    Ok(RunInputs {
        organization,
        token,
        filter,
    })
}

/// Executes one run
///
/// Every default group is processed in response order and its outputs are
/// published before the next group is fetched, so with several default
/// groups the last one wins. An error stops the run; outputs published for
/// earlier groups stay published.
pub async fn run(
    source: &dyn InputSource,
    connector: &dyn InventoryConnector,
    sink: &mut dyn OutputSink,
) -> Result<RunReport, RunError> {
    let inputs = resolve_inputs(source)?;
    if let Some(filter) = &inputs.filter {
        info!("Filtering runner names with /{}/", filter.as_str());
    }

    let inventory = connector.connect(&inputs.token)?;

    info!("Querying runner groups of {}", inputs.organization);
    let groups = inventory.runner_groups(&inputs.organization).await?;

    let mut report = RunReport::default();
    for group in groups.default_groups() {
        info!("Fetching runners of default group '{}'", group.name);
        let runners = inventory.runners(group).await?;

        let classification = Classification::build(&runners.runners, inputs.filter.as_ref());
        for (label, count) in classification.counts() {
            info!("  {}: {} runner(s)", label, count);
            if label.output_key().is_none() {
                warn!("Runners with OS '{}' are only listed in 'all'", label);
            }
        }

        for (name, value) in classification.outputs()? {
            sink.set_output(name, &value)?;
        }

        report.groups += 1;
        report.runners += runners.runners.len();
        report.matched += classification.len();
        info!(
            "Published {} of {} runner(s) from group '{}'",
            classification.len(),
            runners.runners.len(),
            group.name
        );
    }

    if report.groups == 0 {
        warn!(
            "Organization {} has no default runner group; no outputs set",
            inputs.organization
        );
    }

    Ok(report)
}

/// Executes one run and reports a failure to the sink
///
/// At most one failure message is emitted per run.
pub async fn run_and_report(
    source: &dyn InputSource,
    connector: &dyn InventoryConnector,
    sink: &mut dyn OutputSink,
) -> Result<RunReport, RunError> {
    let result = run(source, connector, sink).await;
    if let Err(e) = &result {
        match e {
            RunError::Api(api) => error!("Run failed: {}", api),
            other => error!("Run failed: {}", other),
        }
        if let Err(io_err) = sink.set_failed(&e.to_string()) {
            error!("Failed to report failure: {}", io_err);
        }
    }
    result
}
