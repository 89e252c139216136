//! Action input resolution

use std::collections::HashMap;
use std::ffi::OsString;

use super::InputSource;

/// Inputs taken from explicit overrides or `INPUT_<NAME>` variables
///
/// Overrides (command-line flags) win over the environment. Values are
/// trimmed and blank values count as unset.
#[derive(Default)]
pub struct ActionInputs {
    overrides: HashMap<String, String>,
    env: HashMap<String, String>,
}

impl ActionInputs {
    /// Creates inputs backed by a snapshot of environment variables
    pub fn new(env: HashMap<String, String>) -> Self {
        Self {
            overrides: HashMap::new(),
            env,
        }
    }

    /// Creates inputs backed by the current process environment
    pub fn from_env() -> Self {
        Self::from_vars_os(std::env::vars_os())
    }

    /// Creates inputs from raw environment entries
    ///
    /// Entries whose key or value is not valid UTF-8 are skipped.
    pub fn from_vars_os<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let env = vars
            .into_iter()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self::new(env)
    }

    /// Sets an override for an input, ignoring `None`
    pub fn with_override(mut self, name: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.overrides.insert(name.to_string(), value);
        }
        self
    }

    /// Environment variable the runner uses for an input
    fn env_key(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl std::fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // values may hold credentials
        f.debug_struct("ActionInputs")
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl InputSource for ActionInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.overrides
            .get(name)
            .or_else(|| self.env.get(&Self::env_key(name)))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
