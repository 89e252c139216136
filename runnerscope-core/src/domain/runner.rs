//! Runner domain model
//!
//! Represents a self-hosted runner registered to an organization.

use serde::{Deserialize, Serialize};

/// A single CI execution agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    /// Numeric identifier of the runner
    #[serde(default)]
    pub id: u64,

    /// Runner name, unique within the organization
    pub name: String,

    /// Operating system as reported by the API ("Linux", "Windows", "macOS")
    pub os: String,

    /// Connection status ("online" or "offline")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the runner is currently executing a job
    #[serde(default)]
    pub busy: bool,

    /// Labels attached to the runner
    #[serde(default)]
    pub labels: Vec<RunnerLabel>,
}

impl Runner {
    /// Normalized operating system of this runner
    pub fn os_label(&self) -> OsLabel {
        OsLabel::parse(&self.os)
    }
}

/// A label attached to a runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerLabel {
    pub name: String,

    /// "read-only" for labels the platform assigns, "custom" otherwise
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Operating system bucket a runner is classified under
///
/// Parsing is case-insensitive. `macos` and `mac` both map to [`OsLabel::MacOs`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OsLabel {
    Windows,
    Linux,
    MacOs,
    /// Any other label, lowercased
    Other(String),
}

impl OsLabel {
    /// Parse a raw OS field into a label
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        match lowered.as_str() {
            "windows" => OsLabel::Windows,
            "linux" => OsLabel::Linux,
            "macos" | "mac" => OsLabel::MacOs,
            _ => OsLabel::Other(lowered),
        }
    }

    /// Output key this label is published under, if any
    pub fn output_key(&self) -> Option<&'static str> {
        match self {
            OsLabel::Windows => Some("windows"),
            OsLabel::Linux => Some("linux"),
            OsLabel::MacOs => Some("mac"),
            OsLabel::Other(_) => None,
        }
    }

    /// The labels that have a dedicated output, in publication order
    pub fn published() -> [OsLabel; 3] {
        [OsLabel::Windows, OsLabel::Linux, OsLabel::MacOs]
    }
}

impl std::fmt::Display for OsLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsLabel::Windows => write!(f, "windows"),
            OsLabel::Linux => write!(f, "linux"),
            OsLabel::MacOs => write!(f, "macos"),
            OsLabel::Other(label) => write!(f, "{}", label),
        }
    }
}
