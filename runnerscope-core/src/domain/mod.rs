//! Core domain types
//!
//! These types mirror the records returned by the organization runner
//! endpoints. They are read-only once fetched and live for a single run.

pub mod group;
pub mod runner;
