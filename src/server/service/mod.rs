//! Domain services.
//!
//! Services orchestrate the repositories: the editable-table reconciliation
//! save for clients and policies, the renewal workflow (the one part of the
//! system with real state-machine character), and the statistics aggregator.

pub mod client;
pub mod policy;
pub mod reconcile;
pub mod renewal;
pub mod stats;

#[cfg(test)]
mod tests;
