//! Server-side model types: shared application state and database model
//! aliases.

pub mod app;
pub mod db;
