use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters bounding and filtering the renewal working set.
///
/// All filters are optional and AND-combined; an absent filter matches
/// everything. The time window defaults match the operator controls:
/// 90 days of lookback for overdue cases, 60 days of lookahead.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RenewalQueryDto {
    pub window_days: Option<i64>,
    pub lookback_days: Option<i64>,
    /// Exact-match filter on the executive/salesperson name
    pub ejecutivo: Option<String>,
    /// Exact-match filter on the insurer name
    pub aseguradora: Option<String>,
    /// Exact-match filter on the broker name
    pub corredor: Option<String>,
    /// Exact-match filter on the agent name
    pub agente: Option<String>,
    /// Case-insensitive substring filter on the client name
    pub cliente: Option<String>,
}

/// Derived urgency of a policy in the renewal working set. Never stored;
/// recomputed against "today" on every request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenewalStatusDto {
    /// True when the coverage-end date is already past
    pub overdue: bool,
    /// Whole days overdue, or days remaining until expiry
    pub days: i64,
    /// Display label, e.g. `OVERDUE (3 days)` or `DUE IN 12 DAYS`
    pub label: String,
}

/// One row of the renewal working set: the policy's commercial terms plus
/// its derived urgency. Client, insurer, branch, and risk are read-only in
/// this view; only the validity window, premiums, and document reference may
/// be edited before confirming.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenewalRowDto {
    pub id: i32,
    pub cliente_id: i32,
    pub cliente_nombre: Option<String>,
    pub aseguradora: String,
    pub ramo: String,
    pub detalle_riesgo: String,
    pub vigencia_hasta: NaiveDate,
    pub premio_uyu: Option<Decimal>,
    pub premio_usd: Option<Decimal>,
    pub corredor: Option<String>,
    pub agente: Option<String>,
    pub ejecutivo: Option<String>,
    pub archivo_url: Option<String>,
    pub status: RenewalStatusDto,
}

/// A renewal confirmed by the operator: the successor policy's values, as
/// edited inline. Inserted as a brand-new policy row; the expiring original
/// is left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenewPolicyDto {
    pub cliente_id: i32,
    pub aseguradora: String,
    pub ramo: String,
    pub detalle_riesgo: String,
    /// The new coverage-end date chosen by the operator
    pub vigencia_hasta: NaiveDate,
    pub premio_uyu: Option<Decimal>,
    pub premio_usd: Option<Decimal>,
    pub corredor: Option<String>,
    pub agente: Option<String>,
    pub ejecutivo: Option<String>,
    pub archivo_url: Option<String>,
}

/// Batch RENEW request covering the entire edited working set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenewBatchDto {
    pub rows: Vec<RenewPolicyDto>,
}

/// Batch LAPSE ("no renueva") request: policies the client will not renew,
/// identified by active-policy id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LapseBatchDto {
    pub ids: Vec<i32>,
}

/// Distinct values available for the renewal view's dropdown filters,
/// scanned from the unfiltered policy table with blanks excluded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenewalFilterOptionsDto {
    pub ejecutivos: Vec<String>,
    pub aseguradoras: Vec<String>,
    pub corredores: Vec<String>,
    pub agentes: Vec<String>,
}
