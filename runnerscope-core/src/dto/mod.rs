//! Data Transfer Objects
//!
//! Response envelopes returned by the runner endpoints of the REST API.

pub mod runner;
