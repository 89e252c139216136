//! GitHub Actions runtime adapters
//!
//! The pipeline never touches the process environment or stdout directly.
//! It reads inputs through an [`InputSource`] and publishes results through
//! an [`OutputSink`], so tests can substitute in-memory implementations.

mod inputs;
mod outputs;

pub use inputs::ActionInputs;
pub use outputs::ActionOutputs;

use std::io;

/// Trait for providing action inputs
pub trait InputSource: Send + Sync {
    /// Get an input by name
    ///
    /// # Returns
    /// The trimmed value, or `None` when the input is unset or blank
    fn get(&self, name: &str) -> Option<String>;
}

/// Trait for publishing step results to the host
pub trait OutputSink {
    /// Set a named step output, replacing any earlier value
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Mark the run as failed with a human-readable message
    fn set_failed(&mut self, message: &str) -> io::Result<()>;
}

/// Escape a workflow command message
pub(crate) fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value
pub(crate) fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
