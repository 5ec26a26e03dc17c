//! Test utilities for the corredora workspace.
//!
//! Provides a declarative [`TestBuilder`] for standing up an in-memory
//! SQLite database with the CRM tables, plus mock-data factories for
//! clients, policies, and lapsed policies.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
