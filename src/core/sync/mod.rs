//! Sync run orchestration

pub mod coordinator;
pub mod summary;

pub use coordinator::SyncCoordinator;
pub use summary::{SyncOutcome, SyncSummary};
