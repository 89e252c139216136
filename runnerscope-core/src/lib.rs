//! Runnerscope Core
//!
//! Core types for the runnerscope inventory action.
//!
//! This crate contains:
//! - Domain types: runner groups and runners as reported by the GitHub API
//! - DTOs: response envelopes of the runner endpoints
//! - Classification: grouping runner names by operating system

pub mod classify;
pub mod domain;
pub mod dto;

pub use classify::{Classification, NameFilter};
pub use domain::group::RunnerGroup;
pub use domain::runner::{OsLabel, Runner};
