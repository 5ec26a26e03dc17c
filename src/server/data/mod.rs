//! Data access layer repositories.
//!
//! Repositories wrap all SQL behind SeaORM query builders; every filter value
//! travels as a bind parameter, never interpolated into query text. Each
//! repository borrows any `ConnectionTrait` implementor so the same methods
//! run against the pool or inside a transaction.

pub mod client;
pub mod lapsed;
pub mod policy;

#[cfg(test)]
mod tests;

use sea_orm::sea_query::{Expr, ExprTrait, Func, IntoColumnRef, SimpleExpr};

/// Case-insensitive substring match: `lower(col) LIKE %lower(needle)%`.
///
/// LIKE case-sensitivity differs between PostgreSQL and SQLite, so both
/// sides are lowered explicitly.
pub(crate) fn contains_ci(col: impl IntoColumnRef, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", needle.to_lowercase());
    Expr::expr(Func::lower(Expr::col(col))).like(pattern)
}
