//! Pipeline stages
//!
//! The stages compose in a fixed order: state -> fetch (adapter) ->
//! transform -> pricing -> project -> output, driven by the sync
//! coordinator.

pub mod output;
pub mod pricing;
pub mod project;
pub mod state;
pub mod sync;
pub mod transform;
