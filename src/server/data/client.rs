use entity::cliente::{ActiveModel, Column, Entity};
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::client::ClientFieldsDto, server::data::contains_ci, server::model::db::ClientModel};

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the client roster, newest first. A non-blank filter matches as a
    /// case-insensitive substring of the name OR the document number.
    pub async fn search(&self, filter: Option<&str>) -> Result<Vec<ClientModel>, DbErr> {
        let mut query = Entity::find().order_by_desc(Column::Id);

        if let Some(needle) = filter.map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(contains_ci((Entity, Column::NombreCompleto), needle))
                    .add(contains_ci((Entity, Column::DocumentoIdentidad), needle)),
            );
        }

        query.all(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ClientModel>, DbErr> {
        Entity::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, fields: &ClientFieldsDto) -> Result<ClientModel, DbErr> {
        let client = ActiveModel {
            nombre_completo: ActiveValue::Set(fields.nombre_completo.clone()),
            documento_identidad: ActiveValue::Set(fields.documento_identidad.clone()),
            celular: ActiveValue::Set(fields.celular.clone()),
            email: ActiveValue::Set(fields.email.clone()),
            domicilio: ActiveValue::Set(fields.domicilio.clone()),
            ..Default::default()
        };

        client.insert(self.db).await
    }

    /// Unconditional full-field overwrite; issued for every surviving row of
    /// a reconciliation save whether or not anything changed.
    pub async fn update(&self, id: i32, fields: &ClientFieldsDto) -> Result<ClientModel, DbErr> {
        let client = ActiveModel {
            id: ActiveValue::Unchanged(id),
            nombre_completo: ActiveValue::Set(fields.nombre_completo.clone()),
            documento_identidad: ActiveValue::Set(fields.documento_identidad.clone()),
            celular: ActiveValue::Set(fields.celular.clone()),
            email: ActiveValue::Set(fields.email.clone()),
            domicilio: ActiveValue::Set(fields.domicilio.clone()),
        };

        client.update(self.db).await
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Entity::delete_by_id(id).exec(self.db).await
    }
}
