use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{BatchOutcomeDto, ErrorDto},
        renewal::{
            LapseBatchDto, RenewBatchDto, RenewalFilterOptionsDto, RenewalQueryDto, RenewalRowDto,
        },
    },
    server::{
        data::policy::RenewalFilters,
        error::Error,
        model::app::AppState,
        service::renewal::{RenewalService, RenewalWindow, DEFAULT_LOOKBACK_DAYS, DEFAULT_WINDOW_DAYS},
    },
};

pub static RENEWAL_TAG: &str = "renewal";

/// List the renewal working set: policies expiring inside the window,
/// classified as overdue or upcoming and sorted soonest-due first
#[utoipa::path(
    get,
    path = "/api/renewals",
    tag = RENEWAL_TAG,
    params(RenewalQueryDto),
    responses(
        (status = 200, description = "Success when listing the renewal working set", body = Vec<RenewalRowDto>),
        (status = 400, description = "Invalid window bounds", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_renewals(
    State(state): State<AppState>,
    Query(query): Query<RenewalQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let renewal_service = RenewalService::new(&state.db);

    let window = RenewalWindow::new(
        query.lookback_days.unwrap_or(DEFAULT_LOOKBACK_DAYS),
        query.window_days.unwrap_or(DEFAULT_WINDOW_DAYS),
    )?;
    let filters = RenewalFilters {
        ejecutivo: query.ejecutivo,
        aseguradora: query.aseguradora,
        corredor: query.corredor,
        agente: query.agente,
        cliente: query.cliente,
    };

    let today = Utc::now().date_naive();
    let rows = renewal_service.working_set(today, window, &filters).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Distinct dropdown options for the renewal view's filters
#[utoipa::path(
    get,
    path = "/api/renewals/filters",
    tag = RENEWAL_TAG,
    responses(
        (status = 200, description = "Success when listing filter options", body = RenewalFilterOptionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_renewal_filters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let renewal_service = RenewalService::new(&state.db);

    let options = renewal_service.filter_options().await?;

    Ok((StatusCode::OK, Json(options)))
}

/// Confirm renewals: insert one successor policy per edited row, leaving the
/// expiring originals untouched
#[utoipa::path(
    post,
    path = "/api/renewals/renew",
    tag = RENEWAL_TAG,
    request_body = RenewBatchDto,
    responses(
        (status = 200, description = "Batch completed (possibly with per-row failures)", body = BatchOutcomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn renew(
    State(state): State<AppState>,
    Json(batch): Json<RenewBatchDto>,
) -> Result<impl IntoResponse, Error> {
    let renewal_service = RenewalService::new(&state.db);

    let outcome = renewal_service.renew_batch(&batch.rows).await;

    Ok((StatusCode::OK, Json(outcome)))
}

/// Confirm non-renewals ("no renueva"): archive each policy under the
/// lapsed table and delete it from the active book
#[utoipa::path(
    post,
    path = "/api/renewals/lapse",
    tag = RENEWAL_TAG,
    request_body = LapseBatchDto,
    responses(
        (status = 200, description = "Batch completed (possibly with per-row failures)", body = BatchOutcomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lapse(
    State(state): State<AppState>,
    Json(batch): Json<LapseBatchDto>,
) -> Result<impl IntoResponse, Error> {
    let renewal_service = RenewalService::new(&state.db);

    let outcome = renewal_service
        .lapse_batch(&batch.ids, Utc::now().naive_utc())
        .await;

    Ok((StatusCode::OK, Json(outcome)))
}
