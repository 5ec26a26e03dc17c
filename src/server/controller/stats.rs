use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        stats::{StatsDto, StatsQueryDto},
    },
    server::{
        data::policy::StatsFilters, error::Error, model::app::AppState,
        service::stats::StatsService,
    },
};

pub static STATS_TAG: &str = "stats";

/// Statistics dashboard: grand normalized-premium total over the filtered
/// set plus grouped totals for charting
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    params(StatsQueryDto),
    responses(
        (status = 200, description = "Success when computing statistics", body = StatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let stats_service = StatsService::new(&state.db, state.exchange_rate_uyu_usd);

    let filters = StatsFilters {
        ejecutivo: query.ejecutivo,
        aseguradora: query.aseguradora,
        ramo: query.ramo,
        agente: query.agente,
    };

    let stats = stats_service.aggregate(&filters, query.group_by).await?;

    Ok((StatusCode::OK, Json(stats)))
}
