//! Tests for LapsedPolicyRepository: archiving copies the commercial fields
//! and the archive lists newest lapse first.

use chrono::NaiveDate;
use corredora_test_utils::{
    fixtures::{mock_cliente, mock_seguro},
    TestBuilder, TestError,
};
use sea_orm::ActiveModelTrait;

use crate::server::data::lapsed::LapsedPolicyRepository;

#[tokio::test]
async fn create_from_policy_copies_commercial_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let vence = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let policy = mock_seguro(cliente.id, vence).insert(&test.db).await?;

    let fecha_baja = NaiveDate::from_ymd_opt(2026, 8, 30)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    let lapsed_repo = LapsedPolicyRepository::new(&test.db);
    let lapsed = lapsed_repo.create_from_policy(&policy, fecha_baja).await?;

    assert_eq!(lapsed.cliente_id, policy.cliente_id);
    assert_eq!(lapsed.aseguradora, policy.aseguradora);
    assert_eq!(lapsed.ramo, policy.ramo);
    assert_eq!(lapsed.detalle_riesgo, policy.detalle_riesgo);
    assert_eq!(lapsed.vigencia_hasta, policy.vigencia_hasta);
    assert_eq!(lapsed.premio_uyu, policy.premio_uyu);
    assert_eq!(lapsed.premio_usd, policy.premio_usd);
    assert_eq!(lapsed.ejecutivo, policy.ejecutivo);
    assert_eq!(lapsed.fecha_baja, fecha_baja);

    Ok(())
}

#[tokio::test]
async fn list_with_client_orders_newest_lapse_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_crm_tables().build().await?;
    let cliente = mock_cliente("María García", "41112223").insert(&test.db).await?;

    let vence = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let policy = mock_seguro(cliente.id, vence).insert(&test.db).await?;

    let earlier = vence.and_hms_opt(9, 0, 0).unwrap();
    let later = vence.and_hms_opt(17, 0, 0).unwrap();

    let lapsed_repo = LapsedPolicyRepository::new(&test.db);
    let first = lapsed_repo.create_from_policy(&policy, earlier).await?;
    let second = lapsed_repo.create_from_policy(&policy, later).await?;

    let result = lapsed_repo.list_with_client().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].0.id, second.id);
    assert_eq!(result[1].0.id, first.id);
    assert_eq!(
        result[0].1.as_ref().map(|c| c.nombre_completo.as_str()),
        Some("María García")
    );

    Ok(())
}
