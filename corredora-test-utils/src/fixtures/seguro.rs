use chrono::{NaiveDate, NaiveDateTime};
use entity::{ex_seguro, seguro};
use rust_decimal::Decimal;
use sea_orm::ActiveValue;

/// An active policy ready to insert. Commercial fields carry plausible
/// defaults; override whichever the test cares about before inserting.
pub fn mock_seguro(cliente_id: i32, vigencia_hasta: NaiveDate) -> seguro::ActiveModel {
    seguro::ActiveModel {
        cliente_id: ActiveValue::Set(cliente_id),
        aseguradora: ActiveValue::Set("Sura".to_string()),
        ramo: ActiveValue::Set("Automóviles".to_string()),
        detalle_riesgo: ActiveValue::Set("Toyota Corolla 2020".to_string()),
        vigencia_desde: ActiveValue::Set(None),
        vigencia_hasta: ActiveValue::Set(vigencia_hasta),
        premio_uyu: ActiveValue::Set(Some(Decimal::new(40_500, 0))),
        premio_usd: ActiveValue::Set(None),
        corredor: ActiveValue::Set(Some("Corredor Central".to_string())),
        agente: ActiveValue::Set(Some("Agencia Sur".to_string())),
        ejecutivo: ActiveValue::Set(Some("Lucía Fernández".to_string())),
        archivo_url: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// A lapsed-policy archive row ready to insert.
pub fn mock_ex_seguro(
    cliente_id: i32,
    vigencia_hasta: NaiveDate,
    fecha_baja: NaiveDateTime,
) -> ex_seguro::ActiveModel {
    ex_seguro::ActiveModel {
        cliente_id: ActiveValue::Set(cliente_id),
        aseguradora: ActiveValue::Set("Sura".to_string()),
        ramo: ActiveValue::Set("Automóviles".to_string()),
        detalle_riesgo: ActiveValue::Set("Toyota Corolla 2020".to_string()),
        vigencia_desde: ActiveValue::Set(None),
        vigencia_hasta: ActiveValue::Set(vigencia_hasta),
        premio_uyu: ActiveValue::Set(Some(Decimal::new(40_500, 0))),
        premio_usd: ActiveValue::Set(None),
        corredor: ActiveValue::Set(Some("Corredor Central".to_string())),
        agente: ActiveValue::Set(Some("Agencia Sur".to_string())),
        ejecutivo: ActiveValue::Set(Some("Lucía Fernández".to_string())),
        archivo_url: ActiveValue::Set(None),
        fecha_baja: ActiveValue::Set(fecha_baja),
        ..Default::default()
    }
}
