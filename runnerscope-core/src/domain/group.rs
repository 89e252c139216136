//! Runner group domain model

use serde::{Deserialize, Serialize};

/// A named collection of runners within an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerGroup {
    /// Numeric identifier of the group
    #[serde(default)]
    pub id: u64,

    /// Display name of the group
    #[serde(default)]
    pub name: String,

    /// Whether this is the organization's default group
    #[serde(rename = "default", default)]
    pub is_default: bool,

    /// Absolute URL of the group's runners sub-resource
    pub runners_url: String,

    /// Repository visibility of the group ("all", "selected", "private")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}
