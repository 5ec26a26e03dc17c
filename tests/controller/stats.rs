//! Endpoint tests for the statistics dashboard.

use axum::{extract::Query, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use corredora::{
    model::stats::{StatsDto, StatsGroupBy, StatsQueryDto},
    server::{controller::stats, model::app::AppState},
};
use corredora_test_utils::{
    fixtures::{mock_cliente, mock_seguro},
    TestBuilder, TestError,
};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ActiveValue};

async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_stats_normalizes_and_groups() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let vence = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();

    let mut policy = mock_seguro(cliente.id, vence);
    policy.premio_uyu = ActiveValue::Set(Some(dec!(4050)));
    policy.premio_usd = ActiveValue::Set(Some(dec!(100)));
    policy.insert(&test.db).await?;

    let state: AppState = test.to_app_state(dec!(40.5));

    let query = StatsQueryDto {
        group_by: Some(StatsGroupBy::Aseguradora),
        ejecutivo: None,
        aseguradora: None,
        ramo: None,
        agente: None,
    };

    let result = stats::get_stats(State(state), Query(query)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let dto: StatsDto = body_json(resp).await;
    assert_eq!(dto.count, 1);
    assert_eq!(dto.total_usd, dec!(200));
    assert_eq!(dto.groups.len(), 1);
    assert_eq!(dto.groups[0].key, "Sura");

    Ok(())
}

#[tokio::test]
async fn get_stats_on_empty_book_is_zero() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let state: AppState = test.to_app_state(dec!(40.5));

    let query = StatsQueryDto {
        group_by: None,
        ejecutivo: None,
        aseguradora: None,
        ramo: None,
        agente: None,
    };

    let result = stats::get_stats(State(state), Query(query)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let dto: StatsDto = body_json(resp).await;
    assert_eq!(dto.count, 0);
    assert_eq!(dto.total_usd, dec!(0));
    assert!(dto.groups.is_empty());

    Ok(())
}
