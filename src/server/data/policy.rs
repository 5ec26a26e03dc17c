use chrono::NaiveDate;
use entity::seguro::{ActiveModel, Column, Entity};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::policy::PolicyFieldsDto,
    server::{
        data::contains_ci,
        model::db::{ClientModel, PolicyModel},
    },
};

/// Optional exact-match and substring filters composable with the renewal
/// time window. An unset field matches every row.
#[derive(Debug, Clone, Default)]
pub struct RenewalFilters {
    pub ejecutivo: Option<String>,
    pub aseguradora: Option<String>,
    pub corredor: Option<String>,
    pub agente: Option<String>,
    /// Case-insensitive substring on the client name
    pub cliente: Option<String>,
}

/// Exact-match filters for the statistics views. An unset field matches
/// every row.
#[derive(Debug, Clone, Default)]
pub struct StatsFilters {
    pub ejecutivo: Option<String>,
    pub aseguradora: Option<String>,
    pub ramo: Option<String>,
    pub agente: Option<String>,
}

pub struct PolicyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PolicyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the policy book joined with client identity, newest first.
    /// A non-blank filter matches as a case-insensitive substring of the
    /// client name OR the risk descriptor.
    pub async fn search_with_client(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<(PolicyModel, Option<ClientModel>)>, DbErr> {
        let mut query = Entity::find()
            .find_also_related(entity::prelude::Cliente)
            .order_by_desc(Column::Id);

        if let Some(needle) = filter.map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(contains_ci(
                        (entity::cliente::Entity, entity::cliente::Column::NombreCompleto),
                        needle,
                    ))
                    .add(contains_ci((Entity, Column::DetalleRiesgo), needle)),
            );
        }

        query.all(self.db).await
    }

    /// Policies whose coverage-end date falls inside `[from, to]`, joined
    /// with client identity and sorted soonest-due first. The extra filters
    /// are AND-combined on top of the window.
    pub async fn list_expiring(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        filters: &RenewalFilters,
    ) -> Result<Vec<(PolicyModel, Option<ClientModel>)>, DbErr> {
        let mut query = Entity::find()
            .find_also_related(entity::prelude::Cliente)
            .filter(Column::VigenciaHasta.between(from, to))
            .order_by_asc(Column::VigenciaHasta);

        if let Some(ejecutivo) = &filters.ejecutivo {
            query = query.filter(Column::Ejecutivo.eq(ejecutivo));
        }
        if let Some(aseguradora) = &filters.aseguradora {
            query = query.filter(Column::Aseguradora.eq(aseguradora));
        }
        if let Some(corredor) = &filters.corredor {
            query = query.filter(Column::Corredor.eq(corredor));
        }
        if let Some(agente) = &filters.agente {
            query = query.filter(Column::Agente.eq(agente));
        }
        if let Some(cliente) = filters.cliente.as_deref().map(str::trim) {
            if !cliente.is_empty() {
                query = query.filter(contains_ci(
                    (entity::cliente::Entity, entity::cliente::Column::NombreCompleto),
                    cliente,
                ));
            }
        }

        query.all(self.db).await
    }

    /// The full policy book narrowed by the statistics filters, no window.
    pub async fn list_filtered(&self, filters: &StatsFilters) -> Result<Vec<PolicyModel>, DbErr> {
        let mut query = Entity::find();

        if let Some(ejecutivo) = &filters.ejecutivo {
            query = query.filter(Column::Ejecutivo.eq(ejecutivo));
        }
        if let Some(aseguradora) = &filters.aseguradora {
            query = query.filter(Column::Aseguradora.eq(aseguradora));
        }
        if let Some(ramo) = &filters.ramo {
            query = query.filter(Column::Ramo.eq(ramo));
        }
        if let Some(agente) = &filters.agente {
            query = query.filter(Column::Agente.eq(agente));
        }

        query.all(self.db).await
    }

    /// Distinct non-blank values of one column, for dropdown option lists.
    /// Scans the whole policy table, not the windowed working set.
    pub async fn distinct_non_empty(&self, column: Column) -> Result<Vec<String>, DbErr> {
        Entity::find()
            .select_only()
            .column(column)
            .distinct()
            .filter(column.is_not_null())
            .filter(column.ne(""))
            .order_by_asc(column)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PolicyModel>, DbErr> {
        Entity::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, fields: &PolicyFieldsDto) -> Result<PolicyModel, DbErr> {
        let policy = ActiveModel {
            cliente_id: ActiveValue::Set(fields.cliente_id),
            aseguradora: ActiveValue::Set(fields.aseguradora.clone()),
            ramo: ActiveValue::Set(fields.ramo.clone()),
            detalle_riesgo: ActiveValue::Set(fields.detalle_riesgo.clone()),
            vigencia_desde: ActiveValue::Set(fields.vigencia_desde),
            vigencia_hasta: ActiveValue::Set(fields.vigencia_hasta),
            premio_uyu: ActiveValue::Set(fields.premio_uyu),
            premio_usd: ActiveValue::Set(fields.premio_usd),
            corredor: ActiveValue::Set(fields.corredor.clone()),
            agente: ActiveValue::Set(fields.agente.clone()),
            ejecutivo: ActiveValue::Set(fields.ejecutivo.clone()),
            archivo_url: ActiveValue::Set(fields.archivo_url.clone()),
            ..Default::default()
        };

        policy.insert(self.db).await
    }

    /// Unconditional full-field overwrite by id; the reconciliation save and
    /// concurrent operators both rely on last-write-wins here.
    pub async fn update(&self, id: i32, fields: &PolicyFieldsDto) -> Result<PolicyModel, DbErr> {
        let policy = ActiveModel {
            id: ActiveValue::Unchanged(id),
            cliente_id: ActiveValue::Set(fields.cliente_id),
            aseguradora: ActiveValue::Set(fields.aseguradora.clone()),
            ramo: ActiveValue::Set(fields.ramo.clone()),
            detalle_riesgo: ActiveValue::Set(fields.detalle_riesgo.clone()),
            vigencia_desde: ActiveValue::Set(fields.vigencia_desde),
            vigencia_hasta: ActiveValue::Set(fields.vigencia_hasta),
            premio_uyu: ActiveValue::Set(fields.premio_uyu),
            premio_usd: ActiveValue::Set(fields.premio_usd),
            corredor: ActiveValue::Set(fields.corredor.clone()),
            agente: ActiveValue::Set(fields.agente.clone()),
            ejecutivo: ActiveValue::Set(fields.ejecutivo.clone()),
            archivo_url: ActiveValue::Set(fields.archivo_url.clone()),
        };

        policy.update(self.db).await
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Entity::delete_by_id(id).exec(self.db).await
    }
}
