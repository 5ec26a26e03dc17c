//! Tests for the statistics aggregator: currency normalization and
//! group-by-sum behavior.

use chrono::NaiveDate;
use corredora_test_utils::{
    fixtures::{mock_cliente, mock_seguro},
    TestBuilder, TestError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    model::stats::StatsGroupBy,
    server::{
        data::policy::StatsFilters,
        service::stats::{normalized_total, StatsService},
    },
};

/// premio_usd=100, premio_uyu=4050, rate=40.5 → 100 + 100 = 200.
#[test]
fn normalized_total_adds_converted_pesos() {
    let total = normalized_total(Some(dec!(4050)), Some(dec!(100)), dec!(40.5));
    assert_eq!(total, dec!(200));
}

/// Absent premium values count as zero on either side.
#[test]
fn normalized_total_treats_absent_as_zero() {
    assert_eq!(normalized_total(None, Some(dec!(75)), dec!(40.5)), dec!(75));
    assert_eq!(normalized_total(Some(dec!(81)), None, dec!(40.5)), dec!(2));
    assert_eq!(normalized_total(None, None, dec!(40.5)), Decimal::ZERO);
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn aggregate_sums_and_groups_by_insurer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let vence = day(2026, 9, 10);

    let mut sura = mock_seguro(cliente.id, vence);
    sura.premio_uyu = ActiveValue::Set(Some(dec!(4050)));
    sura.premio_usd = ActiveValue::Set(Some(dec!(100)));
    sura.insert(&test.db).await?;

    let mut mapfre = mock_seguro(cliente.id, vence);
    mapfre.aseguradora = ActiveValue::Set("Mapfre".to_string());
    mapfre.premio_uyu = ActiveValue::Set(None);
    mapfre.premio_usd = ActiveValue::Set(Some(dec!(50)));
    mapfre.insert(&test.db).await?;

    let stats_service = StatsService::new(&test.db, dec!(40.5));
    let stats = stats_service
        .aggregate(&StatsFilters::default(), Some(StatsGroupBy::Aseguradora))
        .await
        .unwrap();

    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_usd, dec!(250));
    assert_eq!(stats.exchange_rate, dec!(40.5));

    assert_eq!(stats.groups.len(), 2);
    let mapfre_group = stats.groups.iter().find(|g| g.key == "Mapfre").unwrap();
    assert_eq!(mapfre_group.total_usd, dec!(50));
    assert_eq!(mapfre_group.count, 1);
    let sura_group = stats.groups.iter().find(|g| g.key == "Sura").unwrap();
    assert_eq!(sura_group.total_usd, dec!(200));

    Ok(())
}

#[tokio::test]
async fn aggregate_groups_by_expiry_year() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let mut a = mock_seguro(cliente.id, day(2026, 9, 10));
    a.premio_uyu = ActiveValue::Set(None);
    a.premio_usd = ActiveValue::Set(Some(dec!(10)));
    a.insert(&test.db).await?;

    let mut b = mock_seguro(cliente.id, day(2027, 2, 1));
    b.premio_uyu = ActiveValue::Set(None);
    b.premio_usd = ActiveValue::Set(Some(dec!(20)));
    b.insert(&test.db).await?;

    let stats_service = StatsService::new(&test.db, dec!(40.5));
    let stats = stats_service
        .aggregate(&StatsFilters::default(), Some(StatsGroupBy::Anio))
        .await
        .unwrap();

    let keys: Vec<&str> = stats.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["2026", "2027"]);
    assert_eq!(stats.groups[1].total_usd, dec!(20));

    Ok(())
}

/// Rows with a blank grouping value stay out of the chart but still count
/// toward the grand total.
#[tokio::test]
async fn aggregate_drops_blank_group_keys() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let vence = day(2026, 9, 10);

    let mut named = mock_seguro(cliente.id, vence);
    named.premio_uyu = ActiveValue::Set(None);
    named.premio_usd = ActiveValue::Set(Some(dec!(30)));
    named.insert(&test.db).await?;

    let mut anonymous = mock_seguro(cliente.id, vence);
    anonymous.agente = ActiveValue::Set(None);
    anonymous.premio_uyu = ActiveValue::Set(None);
    anonymous.premio_usd = ActiveValue::Set(Some(dec!(70)));
    anonymous.insert(&test.db).await?;

    let stats_service = StatsService::new(&test.db, dec!(40.5));
    let stats = stats_service
        .aggregate(&StatsFilters::default(), Some(StatsGroupBy::Agente))
        .await
        .unwrap();

    assert_eq!(stats.total_usd, dec!(100));
    assert_eq!(stats.groups.len(), 1);
    assert_eq!(stats.groups[0].key, "Agencia Sur");
    assert_eq!(stats.groups[0].total_usd, dec!(30));

    Ok(())
}

#[tokio::test]
async fn aggregate_applies_exact_match_filters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let vence = day(2026, 9, 10);

    let mut sura = mock_seguro(cliente.id, vence);
    sura.premio_uyu = ActiveValue::Set(None);
    sura.premio_usd = ActiveValue::Set(Some(dec!(100)));
    sura.insert(&test.db).await?;

    let mut mapfre = mock_seguro(cliente.id, vence);
    mapfre.aseguradora = ActiveValue::Set("Mapfre".to_string());
    mapfre.premio_uyu = ActiveValue::Set(None);
    mapfre.premio_usd = ActiveValue::Set(Some(dec!(40)));
    mapfre.insert(&test.db).await?;

    let filters = StatsFilters {
        aseguradora: Some("Mapfre".to_string()),
        ..Default::default()
    };

    let stats_service = StatsService::new(&test.db, dec!(40.5));
    let stats = stats_service.aggregate(&filters, None).await.unwrap();

    assert_eq!(stats.count, 1);
    assert_eq!(stats.total_usd, dec!(40));
    assert!(stats.groups.is_empty());

    Ok(())
}
