//! Service layer
//!
//! Services contain the logic of a run: fetching the runner inventory and
//! turning it into step outputs.
//!
//! Network access is trait-based to enable testing and dependency injection.

mod inventory;
mod pipeline;

// Re-export traits
pub use inventory::InventoryConnector;

// Re-export implementations
pub use inventory::GithubConnector;
pub use pipeline::run_and_report;
