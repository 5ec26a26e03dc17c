//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI is served at `/api/docs` for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `GET  /api/clients` - Client roster with substring search
/// - `POST /api/clients` - Create a client (intake)
/// - `PUT  /api/clients` - Bulk reconciliation save for the client table
/// - `GET  /api/policies` - Policy book joined with client identity
/// - `POST /api/policies` - Create a policy (intake)
/// - `PUT  /api/policies` - Bulk reconciliation save for the policy table
/// - `GET  /api/lapsed` - Lapsed-policy archive
/// - `GET  /api/renewals` - Renewal working set, classified and sorted
/// - `GET  /api/renewals/filters` - Dropdown options for the renewal view
/// - `POST /api/renewals/renew` - Batch RENEW
/// - `POST /api/renewals/lapse` - Batch LAPSE
/// - `GET  /api/stats` - Statistics dashboard aggregate
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Corredora", description = "Corredora CRM API"), tags(
        (name = controller::client::CLIENT_TAG, description = "Client roster API routes"),
        (name = controller::policy::POLICY_TAG, description = "Policy book API routes"),
        (name = controller::renewal::RENEWAL_TAG, description = "Renewal workflow API routes"),
        (name = controller::stats::STATS_TAG, description = "Statistics API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::client::list_clients,
            controller::client::create_client,
            controller::client::reconcile_clients
        ))
        .routes(routes!(
            controller::policy::list_policies,
            controller::policy::create_policy,
            controller::policy::reconcile_policies
        ))
        .routes(routes!(controller::policy::list_lapsed))
        .routes(routes!(controller::renewal::get_renewals))
        .routes(routes!(controller::renewal::get_renewal_filters))
        .routes(routes!(controller::renewal::renew))
        .routes(routes!(controller::renewal::lapse))
        .routes(routes!(controller::stats::get_stats))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
