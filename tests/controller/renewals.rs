//! Endpoint tests for the renewal workflow: the classified working set and
//! the RENEW/LAPSE confirmations.

use axum::{extract::Query, extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use corredora::{
    model::{
        api::BatchOutcomeDto,
        renewal::{
            LapseBatchDto, RenewBatchDto, RenewPolicyDto, RenewalQueryDto, RenewalRowDto,
        },
    },
    server::{controller::renewal, model::app::AppState},
};
use corredora_test_utils::{
    fixtures::{mock_cliente, mock_seguro},
    TestBuilder, TestError,
};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, EntityTrait};

async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn empty_query() -> RenewalQueryDto {
    RenewalQueryDto {
        window_days: None,
        lookback_days: None,
        ejecutivo: None,
        aseguradora: None,
        corredor: None,
        agente: None,
        cliente: None,
    }
}

#[tokio::test]
async fn get_renewals_returns_classified_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let today = Utc::now().date_naive();
    mock_seguro(cliente.id, today - Duration::days(3)).insert(&test.db).await?;
    mock_seguro(cliente.id, today + Duration::days(30)).insert(&test.db).await?;

    let state: AppState = test.to_app_state(dec!(40.5));

    let result = renewal::get_renewals(State(state), Query(empty_query())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rows: Vec<RenewalRowDto> = body_json(resp).await;
    assert_eq!(rows.len(), 2);
    assert!(rows[0].status.overdue);
    assert_eq!(rows[0].status.label, "OVERDUE (3 days)");
    assert_eq!(rows[1].status.label, "DUE IN 30 DAYS");

    Ok(())
}

#[tokio::test]
async fn get_renewals_rejects_negative_window() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let state: AppState = test.to_app_state(dec!(40.5));

    let mut query = empty_query();
    query.window_days = Some(-10);

    let result = renewal::get_renewals(State(state), Query(query)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn renew_endpoint_inserts_successors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let today = Utc::now().date_naive();
    mock_seguro(cliente.id, today + Duration::days(5)).insert(&test.db).await?;

    let state: AppState = test.to_app_state(dec!(40.5));

    let batch = RenewBatchDto {
        rows: vec![RenewPolicyDto {
            cliente_id: cliente.id,
            aseguradora: "Sura".to_string(),
            ramo: "Automóviles".to_string(),
            detalle_riesgo: "Toyota Corolla 2020".to_string(),
            vigencia_hasta: today + Duration::days(370),
            premio_uyu: Some(dec!(42000)),
            premio_usd: None,
            corredor: None,
            agente: None,
            ejecutivo: Some("Lucía Fernández".to_string()),
            archivo_url: None,
        }],
    };

    let result = renewal::renew(State(state), Json(batch)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let outcome: BatchOutcomeDto = body_json(resp).await;
    assert_eq!((outcome.processed, outcome.failed), (1, 0));

    let all = entity::prelude::Seguro::find().all(&test.db).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

#[tokio::test]
async fn lapse_endpoint_archives_and_deletes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let today = Utc::now().date_naive();
    let policy = mock_seguro(cliente.id, today - Duration::days(10))
        .insert(&test.db)
        .await?;

    let state: AppState = test.to_app_state(dec!(40.5));

    let result = renewal::lapse(
        State(state),
        Json(LapseBatchDto {
            ids: vec![policy.id],
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let outcome: BatchOutcomeDto = body_json(resp).await;
    assert_eq!((outcome.processed, outcome.failed), (1, 0));

    assert!(entity::prelude::Seguro::find_by_id(policy.id)
        .one(&test.db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::ExSeguro::find().all(&test.db).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn filters_endpoint_lists_distinct_options() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let today = Utc::now().date_naive();
    mock_seguro(cliente.id, today).insert(&test.db).await?;
    mock_seguro(cliente.id, today).insert(&test.db).await?;

    let state: AppState = test.to_app_state(dec!(40.5));

    let result = renewal::get_renewal_filters(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let options: corredora::model::renewal::RenewalFilterOptionsDto = body_json(resp).await;
    assert_eq!(options.aseguradoras, vec!["Sura".to_string()]);
    assert_eq!(options.ejecutivos, vec!["Lucía Fernández".to_string()]);

    Ok(())
}
