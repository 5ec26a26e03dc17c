//! Server application core modules.
//!
//! Everything backing the brokerage CRM's HTTP API lives here: configuration,
//! routing, request handlers, the repository layer over SeaORM, and the
//! domain services implementing the editable-table reconciliation save, the
//! renewal workflow, and the statistics aggregator.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
