use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ReconcileOutcomeDto, SearchQueryDto},
        client::{ClientDto, ClientFieldsDto, ReconcileClientsDto},
    },
    server::{
        data::client::ClientRepository,
        error::Error,
        model::app::AppState,
        service::client::ClientService,
    },
};

pub static CLIENT_TAG: &str = "client";

/// List the client roster, optionally filtered by substring on name or
/// document number
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    params(SearchQueryDto),
    responses(
        (status = 200, description = "Success when listing clients", body = Vec<ClientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<SearchQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let client_repo = ClientRepository::new(&state.db);

    let clients = client_repo.search(query.search.as_deref()).await?;
    let dtos: Vec<ClientDto> = clients.into_iter().map(ClientDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a client (intake form submission)
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = ClientFieldsDto,
    responses(
        (status = 201, description = "Client created", body = ClientDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(fields): Json<ClientFieldsDto>,
) -> Result<impl IntoResponse, Error> {
    let client_repo = ClientRepository::new(&state.db);

    let client = client_repo.create(&fields).await?;

    Ok((StatusCode::CREATED, Json(ClientDto::from(client))))
}

/// Bulk reconciliation save for the editable client table: deletes rows
/// whose ids disappeared since editing began, overwrites every surviving row
#[utoipa::path(
    put,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = ReconcileClientsDto,
    responses(
        (status = 200, description = "Save completed (possibly with per-row failures)", body = ReconcileOutcomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reconcile_clients(
    State(state): State<AppState>,
    Json(save): Json<ReconcileClientsDto>,
) -> Result<impl IntoResponse, Error> {
    let client_service = ClientService::new(&state.db);

    let outcome = client_service.reconcile(&save.before_ids, &save.rows).await;

    Ok((StatusCode::OK, Json(outcome)))
}
