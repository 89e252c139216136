//! Action configuration
//!
//! Connection settings for the REST API and the location of the step
//! outputs file. Action inputs (organization, token, filter) are resolved
//! separately through an [`InputSource`](crate::actions::InputSource).

use std::path::PathBuf;
use std::time::Duration;

use runnerscope_client::{DEFAULT_API_URL, DEFAULT_USER_AGENT};

/// Action configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// REST API base URL (e.g., "https://api.github.com")
    pub api_url: String,

    /// Optional per-request timeout; requests wait indefinitely when unset
    pub timeout: Option<Duration>,

    /// Value of the `User-Agent` header
    pub user_agent: String,

    /// File step outputs are appended to; workflow commands on stdout when unset
    pub output_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_file: None,
        }
    }

    /// Sets a request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.map(Duration::from_secs);
        self
    }

    /// Sets the outputs file
    pub fn with_output_file(mut self, path: Option<PathBuf>) -> Self {
        self.output_file = path.filter(|p| !p.as_os_str().is_empty());
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("timeout must be greater than 0");
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("user_agent cannot be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.timeout, None);
        assert!(config.output_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.api_url = "api.github.com".to_string();
        assert!(config.validate().is_err());

        config.api_url = "https://ghe.example.com/api/v3".to_string();
        assert!(config.validate().is_ok());

        config = config.with_timeout_secs(Some(0));
        assert!(config.validate().is_err());

        config = config.with_timeout_secs(Some(30));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_file_is_ignored() {
        let config = Config::default().with_output_file(Some(PathBuf::new()));
        assert!(config.output_file.is_none());

        let config = Config::default().with_output_file(Some(PathBuf::from("/tmp/out")));
        assert_eq!(config.output_file, Some(PathBuf::from("/tmp/out")));
    }
}
