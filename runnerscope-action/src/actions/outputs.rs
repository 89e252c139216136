//! Step output publication
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT` using the
//! multiline `name<<delimiter` form. Without an outputs file the legacy
//! `::set-output` workflow command is written to stdout instead.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use super::{OutputSink, escape_data, escape_property};

/// Output sink for the GitHub Actions runner
pub struct ActionOutputs<W: Write> {
    output_file: Option<PathBuf>,
    commands: W,
    failed: bool,
}

impl ActionOutputs<io::Stdout> {
    /// Creates a sink writing workflow commands to stdout
    pub fn stdout(output_file: Option<PathBuf>) -> Self {
        Self::new(output_file, io::stdout())
    }
}

impl<W: Write> ActionOutputs<W> {
    /// Creates a sink writing workflow commands to `commands`
    pub fn new(output_file: Option<PathBuf>, commands: W) -> Self {
        Self {
            output_file,
            commands,
            failed: false,
        }
    }

    /// Whether [`OutputSink::set_failed`] has been called
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Consumes the sink, returning the command writer
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.commands
    }

    fn append_to_file(path: &Path, name: &str, value: &str) -> io::Result<()> {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Output '{}' contains the delimiter '{}'", name, delimiter),
            ));
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")?;
        file.flush()
    }
}

impl<W: Write> OutputSink for ActionOutputs<W> {
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        debug!("Setting output {}", name);
        match &self.output_file {
            Some(path) => Self::append_to_file(path, name, value),
            None => {
                writeln!(
                    self.commands,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                )?;
                self.commands.flush()
            }
        }
    }

    fn set_failed(&mut self, message: &str) -> io::Result<()> {
        self.failed = true;
        writeln!(self.commands, "::error::{}", escape_data(message))?;
        self.commands.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_output_without_file_emits_command() {
        let mut sink = ActionOutputs::new(None, Vec::new());
        sink.set_output("linux", r#"["a","c"]"#).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "::set-output name=linux::[\"a\",\"c\"]\n");
    }

    #[test]
    fn test_set_output_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        let mut sink = ActionOutputs::new(Some(path.clone()), Vec::new());

        sink.set_output("windows", r#"["b"]"#).unwrap();
        sink.set_output("mac", "null").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("windows<<ghadelimiter_"));
        assert_eq!(lines[1], r#"["b"]"#);
        assert_eq!(lines[2], &lines[0]["windows<<".len()..]);
        assert!(lines[3].starts_with("mac<<ghadelimiter_"));
        assert_eq!(lines[4], "null");

        // nothing goes to stdout when a file is configured
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn test_unwritable_output_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("github_output");
        let mut sink = ActionOutputs::new(Some(path), Vec::new());

        assert!(sink.set_output("all", "[]").is_err());
    }

    #[test]
    fn test_set_failed_emits_escaped_error() {
        let mut sink = ActionOutputs::new(None, Vec::new());
        assert!(!sink.failed());

        sink.set_failed("line one\nline two").unwrap();

        assert!(sink.failed());
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "::error::line one%0Aline two\n");
    }
}
