use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Grouping key for the statistics dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatsGroupBy {
    Aseguradora,
    Ramo,
    /// Year of the coverage-end date
    Anio,
    Ejecutivo,
    Agente,
}

/// Query parameters for the statistics dashboard. Filters are exact-match,
/// AND-combined, each absent filter meaning "match all".
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct StatsQueryDto {
    pub group_by: Option<StatsGroupBy>,
    pub ejecutivo: Option<String>,
    pub aseguradora: Option<String>,
    pub ramo: Option<String>,
    pub agente: Option<String>,
}

/// One bar/slice of a grouped chart: the group's currency-normalized premium
/// total and its policy count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupTotalDto {
    pub key: String,
    pub total_usd: Decimal,
    pub count: u64,
}

/// The statistics dashboard payload: a grand total over the filtered set
/// plus grouped totals for charting. Recomputed from the live dataset on
/// every request; nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    /// Premium total across the filtered set, normalized to USD
    pub total_usd: Decimal,
    /// Number of policies in the filtered set
    pub count: u64,
    /// Exchange rate used for normalization (UYU per USD)
    pub exchange_rate: Decimal,
    pub groups: Vec<GroupTotalDto>,
}
