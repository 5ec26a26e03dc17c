//! Corredora: internal CRM for an insurance brokerage.
//!
//! Tracks clients, active policies, the renewal workflow, the lapsed-policy
//! archive, and aggregate statistics on top of a relational database,
//! exposed as a JSON HTTP API for the brokerage's form/table UI.

pub mod model;
pub mod server;
