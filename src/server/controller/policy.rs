use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ReconcileOutcomeDto, SearchQueryDto},
        policy::{LapsedPolicyDto, PolicyDto, PolicyFieldsDto, ReconcilePoliciesDto},
    },
    server::{
        data::{lapsed::LapsedPolicyRepository, policy::PolicyRepository},
        error::Error,
        model::app::AppState,
        service::policy::PolicyService,
    },
};

pub static POLICY_TAG: &str = "policy";

/// List the active policy book joined with client identity, optionally
/// filtered by substring on client name or risk descriptor
#[utoipa::path(
    get,
    path = "/api/policies",
    tag = POLICY_TAG,
    params(SearchQueryDto),
    responses(
        (status = 200, description = "Success when listing policies", body = Vec<PolicyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_policies(
    State(state): State<AppState>,
    Query(query): Query<SearchQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let policy_repo = PolicyRepository::new(&state.db);

    let policies = policy_repo.search_with_client(query.search.as_deref()).await?;
    let dtos: Vec<PolicyDto> = policies.into_iter().map(PolicyDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a policy (intake form submission)
#[utoipa::path(
    post,
    path = "/api/policies",
    tag = POLICY_TAG,
    request_body = PolicyFieldsDto,
    responses(
        (status = 201, description = "Policy created", body = PolicyDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_policy(
    State(state): State<AppState>,
    Json(fields): Json<PolicyFieldsDto>,
) -> Result<impl IntoResponse, Error> {
    let policy_repo = PolicyRepository::new(&state.db);

    let policy = policy_repo.create(&fields).await?;

    Ok((StatusCode::CREATED, Json(PolicyDto::from((policy, None)))))
}

/// Bulk reconciliation save for the editable policy table
#[utoipa::path(
    put,
    path = "/api/policies",
    tag = POLICY_TAG,
    request_body = ReconcilePoliciesDto,
    responses(
        (status = 200, description = "Save completed (possibly with per-row failures)", body = ReconcileOutcomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reconcile_policies(
    State(state): State<AppState>,
    Json(save): Json<ReconcilePoliciesDto>,
) -> Result<impl IntoResponse, Error> {
    let policy_service = PolicyService::new(&state.db);

    let outcome = policy_service.reconcile(&save.before_ids, &save.rows).await;

    Ok((StatusCode::OK, Json(outcome)))
}

/// List the lapsed-policy archive, newest lapse first
#[utoipa::path(
    get,
    path = "/api/lapsed",
    tag = POLICY_TAG,
    responses(
        (status = 200, description = "Success when listing lapsed policies", body = Vec<LapsedPolicyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_lapsed(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let lapsed_repo = LapsedPolicyRepository::new(&state.db);

    let lapsed = lapsed_repo.list_with_client().await?;
    let dtos: Vec<LapsedPolicyDto> = lapsed.into_iter().map(LapsedPolicyDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
