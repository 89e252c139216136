//! Runner classification
//!
//! Partitions runner names by operating system in a single pass and
//! renders the result as the JSON payloads published by the action.

use std::collections::BTreeMap;

use regex::Regex;

use crate::domain::runner::{OsLabel, Runner};

/// Output key of the flat list of every runner that passed the filter
pub const ALL_OUTPUT: &str = "all";

/// Regular expression restricting which runner names are classified
///
/// A name passes when the pattern matches anywhere in it.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: Regex,
}

impl NameFilter {
    /// Compile a filter pattern
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Check whether a runner name passes the filter
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// The source pattern
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Runner names grouped by operating system
///
/// Within each bucket names keep the order in which runners were fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: BTreeMap<OsLabel, Vec<String>>,
    all: Vec<String>,
}

impl Classification {
    /// Classify runners, skipping names rejected by `filter`
    pub fn build<'a, I>(runners: I, filter: Option<&NameFilter>) -> Self
    where
        I: IntoIterator<Item = &'a Runner>,
    {
        let mut classification = Self::default();
        for runner in runners {
            if let Some(filter) = filter {
                if !filter.matches(&runner.name) {
                    continue;
                }
            }
            classification.push(runner.os_label(), runner.name.clone());
        }
        classification
    }

    fn push(&mut self, label: OsLabel, name: String) {
        self.buckets.entry(label).or_default().push(name.clone());
        self.all.push(name);
    }

    /// Names classified under `label`, if any
    pub fn bucket(&self, label: &OsLabel) -> Option<&[String]> {
        self.buckets.get(label).map(Vec::as_slice)
    }

    /// Every name that passed the filter, in fetch order
    pub fn all(&self) -> &[String] {
        &self.all
    }

    /// Number of classified runners
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Labels with at least one runner and their bucket sizes
    pub fn counts(&self) -> impl Iterator<Item = (&OsLabel, usize)> {
        self.buckets.iter().map(|(label, names)| (label, names.len()))
    }

    /// Render the published outputs in publication order
    ///
    /// OS buckets without members render as `null`; the `all` list always
    /// renders as an array.
    pub fn outputs(&self) -> serde_json::Result<Vec<(&'static str, String)>> {
        let mut outputs = Vec::with_capacity(4);
        for label in OsLabel::published() {
            if let Some(key) = label.output_key() {
                outputs.push((key, serde_json::to_string(&self.bucket(&label))?));
            }
        }
        outputs.push((ALL_OUTPUT, serde_json::to_string(&self.all)?));
        Ok(outputs)
    }
}
