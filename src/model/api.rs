use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Free-text roster search. Matches as a case-insensitive substring; blank
/// or absent means "match all".
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchQueryDto {
    pub search: Option<String>,
}

/// Outcome of a bulk reconciliation save over an editable table.
///
/// Counts statements issued, not rows that "changed": updates are
/// unconditional full-field overwrites, so `updated` equals the number of
/// surviving rows even when nothing was edited.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReconcileOutcomeDto {
    /// Rows deleted because their id disappeared between snapshots
    pub deleted: u32,
    /// Rows overwritten with their current field values
    pub updated: u32,
    /// Statements that failed; the save never stops early
    pub failed: u32,
}

/// Outcome of a batch renewal-workflow action (RENEW or LAPSE).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchOutcomeDto {
    /// Rows processed to completion
    pub processed: u32,
    /// Rows that failed; the batch continues past failures
    pub failed: u32,
}
