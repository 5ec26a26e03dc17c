use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An active insurance policy. `vigencia_hasta` drives every expiry and
/// renewal decision; either premium column may be absent and is treated as
/// zero wherever arithmetic happens.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seguros")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cliente_id: i32,
    pub aseguradora: String,
    pub ramo: String,
    pub detalle_riesgo: String,
    pub vigencia_desde: Option<Date>,
    pub vigencia_hasta: Date,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub premio_uyu: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub premio_usd: Option<Decimal>,
    pub corredor: Option<String>,
    pub agente: Option<String>,
    pub ejecutivo: Option<String>,
    pub archivo_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::ClienteId",
        to = "super::cliente::Column::Id"
    )]
    Cliente,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
