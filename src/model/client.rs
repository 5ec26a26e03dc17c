use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::db::ClientModel;

/// A client roster row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub nombre_completo: String,
    pub documento_identidad: String,
    pub celular: Option<String>,
    pub email: Option<String>,
    pub domicilio: Option<String>,
}

impl From<ClientModel> for ClientDto {
    fn from(model: ClientModel) -> Self {
        Self {
            id: model.id,
            nombre_completo: model.nombre_completo,
            documento_identidad: model.documento_identidad,
            celular: model.celular,
            email: model.email,
            domicilio: model.domicilio,
        }
    }
}

/// Editable client fields as typed into the intake form or an editable table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientFieldsDto {
    pub nombre_completo: String,
    pub documento_identidad: String,
    pub celular: Option<String>,
    pub email: Option<String>,
    pub domicilio: Option<String>,
}

/// One row of the editable client table at save time. Rows freshly typed by
/// the operator carry no id and are ignored by reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientRowDto {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub fields: ClientFieldsDto,
}

/// Bulk reconciliation save request: the table as it looked before editing
/// began (ids only) and the full table as currently displayed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReconcileClientsDto {
    /// Ids present when the editing session started
    pub before_ids: Vec<i32>,
    /// Every row currently visible, edited or not
    pub rows: Vec<ClientRowDto>,
}
