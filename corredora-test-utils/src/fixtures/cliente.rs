use entity::cliente;
use sea_orm::ActiveValue;

/// A client ready to insert, with contact fields filled in.
pub fn mock_cliente(nombre_completo: &str, documento_identidad: &str) -> cliente::ActiveModel {
    cliente::ActiveModel {
        nombre_completo: ActiveValue::Set(nombre_completo.to_string()),
        documento_identidad: ActiveValue::Set(documento_identidad.to_string()),
        celular: ActiveValue::Set(Some("099123456".to_string())),
        email: ActiveValue::Set(Some("cliente@example.com".to_string())),
        domicilio: ActiveValue::Set(Some("18 de Julio 1234, Montevideo".to_string())),
        ..Default::default()
    }
}
