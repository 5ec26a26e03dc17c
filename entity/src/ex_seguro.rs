use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A lapsed policy, archived when the client chose not to renew. Carries the
/// commercial columns of the original `seguros` row plus the lapse timestamp;
/// there is deliberately no back-reference to the deleted policy id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ex_seguros")]
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
    pub fecha_baja: DateTime,
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
