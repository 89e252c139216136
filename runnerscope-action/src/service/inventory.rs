//! Inventory service
//!
//! Fetches runner groups and the runners of a group from the REST API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use runnerscope_client::{GithubClient, Result};
use runnerscope_core::RunnerGroup;
use runnerscope_core::dto::runner::{RunnerGroupList, RunnerList};

use crate::config::Config;

/// Read access to an organization's runner inventory
#[async_trait]
pub trait RunnerInventory: Send + Sync {
    /// Lists the runner groups of an organization
    async fn runner_groups(&self, organization: &str) -> Result<RunnerGroupList>;

    /// Lists the runners belonging to a group
    async fn runners(&self, group: &RunnerGroup) -> Result<RunnerList>;
}

/// Creates an authenticated [`RunnerInventory`]
///
/// Connecting is deferred until the inputs are validated, so no client
/// exists for a run that fails on configuration.
pub trait InventoryConnector: Send + Sync {
    /// Builds an inventory authenticated with `token`
    fn connect(&self, token: &str) -> Result<Arc<dyn RunnerInventory>>;
}

#[async_trait]
impl RunnerInventory for GithubClient {
    async fn runner_groups(&self, organization: &str) -> Result<RunnerGroupList> {
        self.list_runner_groups(organization).await
    }

    async fn runners(&self, group: &RunnerGroup) -> Result<RunnerList> {
        self.list_runners(&group.runners_url).await
    }
}

/// Connector producing [`GithubClient`]s from the action configuration
pub struct GithubConnector {
    config: Config,
}

impl GithubConnector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl InventoryConnector for GithubConnector {
    fn connect(&self, token: &str) -> Result<Arc<dyn RunnerInventory>> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let client = GithubClient::with_client(self.config.api_url.clone(), token, http_client)
            .with_user_agent(self.config.user_agent.clone());
        Ok(Arc::new(client))
    }
}
