//! Runner DTOs

use serde::{Deserialize, Serialize};

use crate::domain::group::RunnerGroup;
use crate::domain::runner::Runner;

/// Response of `GET /orgs/{org}/actions/runner-groups`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerGroupList {
    #[serde(default)]
    pub total_count: u64,

    pub runner_groups: Vec<RunnerGroup>,
}

impl RunnerGroupList {
    /// Groups flagged as default, in response order
    pub fn default_groups(&self) -> impl Iterator<Item = &RunnerGroup> {
        self.runner_groups.iter().filter(|group| group.is_default)
    }
}

/// Response of `GET {runners_url}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerList {
    #[serde(default)]
    pub total_count: u64,

    pub runners: Vec<Runner>,
}
