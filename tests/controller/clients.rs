//! Endpoint tests for the client roster: listing, intake, and the bulk
//! reconciliation save.

use axum::{extract::Query, extract::State, http::StatusCode, response::IntoResponse, Json};
use corredora::{
    model::{
        api::{ReconcileOutcomeDto, SearchQueryDto},
        client::{ClientDto, ClientFieldsDto, ClientRowDto, ReconcileClientsDto},
    },
    server::{controller::client, model::app::AppState},
};
use corredora_test_utils::{fixtures::mock_cliente, TestBuilder, TestError};
use rust_decimal_macros::dec;
use sea_orm::ActiveModelTrait;

async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn list_clients_filters_by_substring() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;

    mock_cliente("María García", "41112223").insert(&test.db).await?;
    mock_cliente("Ana López", "52223334").insert(&test.db).await?;

    let state: AppState = test.to_app_state(dec!(40.5));

    let result = client::list_clients(
        State(state),
        Query(SearchQueryDto {
            search: Some("mar".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let clients: Vec<ClientDto> = body_json(resp).await;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].nombre_completo, "María García");

    Ok(())
}

#[tokio::test]
async fn create_client_returns_created_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let state: AppState = test.to_app_state(dec!(40.5));

    let fields = ClientFieldsDto {
        nombre_completo: "Marcos Pérez".to_string(),
        documento_identidad: "52223334".to_string(),
        celular: None,
        email: Some("marcos@example.com".to_string()),
        domicilio: None,
    };

    let result = client::create_client(State(state), Json(fields)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: ClientDto = body_json(resp).await;
    assert_eq!(created.nombre_completo, "Marcos Pérez");
    assert!(created.id > 0);

    Ok(())
}

#[tokio::test]
async fn reconcile_clients_reports_counts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;

    let a = mock_cliente("María García", "1").insert(&test.db).await?;
    let b = mock_cliente("Marcos Pérez", "2").insert(&test.db).await?;

    let state: AppState = test.to_app_state(dec!(40.5));

    let save = ReconcileClientsDto {
        before_ids: vec![a.id, b.id],
        rows: vec![ClientRowDto {
            id: Some(a.id),
            fields: ClientFieldsDto {
                nombre_completo: "María García".to_string(),
                documento_identidad: "1".to_string(),
                celular: None,
                email: None,
                domicilio: None,
            },
        }],
    };

    let result = client::reconcile_clients(State(state), Json(save)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let outcome: ReconcileOutcomeDto = body_json(resp).await;
    assert_eq!(outcome.deleted, 1);
    assert_eq!(outcome.updated, 1);
    assert_eq!(outcome.failed, 0);

    Ok(())
}
