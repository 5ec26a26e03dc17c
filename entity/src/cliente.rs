use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A brokerage client. Created by the intake endpoint, looked up by
/// case-insensitive substring on name or document number.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre_completo: String,
    pub documento_identidad: String,
    pub celular: Option<String>,
    pub email: Option<String>,
    pub domicilio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seguro::Entity")]
    Seguro,
    #[sea_orm(has_many = "super::ex_seguro::Entity")]
    ExSeguro,
}

impl Related<super::seguro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seguro.def()
    }
}

impl Related<super::ex_seguro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExSeguro.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
