//! Data transfer objects shared by the HTTP API.

pub mod api;
pub mod client;
pub mod policy;
pub mod renewal;
pub mod stats;
