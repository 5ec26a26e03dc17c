//! HTTP request handlers.
//!
//! Each handler is annotated with its utoipa path specification and wired
//! into the router in [`crate::server::router`].

pub mod client;
pub mod policy;
pub mod renewal;
pub mod stats;
