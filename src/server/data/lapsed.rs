use chrono::NaiveDateTime;
use entity::ex_seguro::{ActiveModel, Column, Entity};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::db::{ClientModel, LapsedPolicyModel, PolicyModel};

pub struct LapsedPolicyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LapsedPolicyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Archives a policy's commercial fields under `ex_seguros`. The archive
    /// row gets its own id; nothing references the source policy id.
    pub async fn create_from_policy(
        &self,
        policy: &PolicyModel,
        fecha_baja: NaiveDateTime,
    ) -> Result<LapsedPolicyModel, DbErr> {
        let lapsed = ActiveModel {
            cliente_id: ActiveValue::Set(policy.cliente_id),
            aseguradora: ActiveValue::Set(policy.aseguradora.clone()),
            ramo: ActiveValue::Set(policy.ramo.clone()),
            detalle_riesgo: ActiveValue::Set(policy.detalle_riesgo.clone()),
            vigencia_desde: ActiveValue::Set(policy.vigencia_desde),
            vigencia_hasta: ActiveValue::Set(policy.vigencia_hasta),
            premio_uyu: ActiveValue::Set(policy.premio_uyu),
            premio_usd: ActiveValue::Set(policy.premio_usd),
            corredor: ActiveValue::Set(policy.corredor.clone()),
            agente: ActiveValue::Set(policy.agente.clone()),
            ejecutivo: ActiveValue::Set(policy.ejecutivo.clone()),
            archivo_url: ActiveValue::Set(policy.archivo_url.clone()),
            fecha_baja: ActiveValue::Set(fecha_baja),
            ..Default::default()
        };

        lapsed.insert(self.db).await
    }

    /// The read-only archive view, newest lapse first.
    pub async fn list_with_client(
        &self,
    ) -> Result<Vec<(LapsedPolicyModel, Option<ClientModel>)>, DbErr> {
        Entity::find()
            .find_also_related(entity::prelude::Cliente)
            .order_by_desc(Column::FechaBaja)
            .all(self.db)
            .await
    }
}
