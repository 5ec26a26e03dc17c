use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::db::{ClientModel, LapsedPolicyModel, PolicyModel};

/// An active policy joined with its owning client's identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PolicyDto {
    pub id: i32,
    pub cliente_id: i32,
    /// Client name from the join; absent if the client row is gone
    pub cliente_nombre: Option<String>,
    pub cliente_documento: Option<String>,
    pub aseguradora: String,
    pub ramo: String,
    pub detalle_riesgo: String,
    pub vigencia_desde: Option<NaiveDate>,
    pub vigencia_hasta: NaiveDate,
    pub premio_uyu: Option<Decimal>,
    pub premio_usd: Option<Decimal>,
    pub corredor: Option<String>,
    pub agente: Option<String>,
    pub ejecutivo: Option<String>,
    pub archivo_url: Option<String>,
}

impl From<(PolicyModel, Option<ClientModel>)> for PolicyDto {
    fn from((policy, client): (PolicyModel, Option<ClientModel>)) -> Self {
        Self {
            id: policy.id,
            cliente_id: policy.cliente_id,
            cliente_nombre: client.as_ref().map(|c| c.nombre_completo.clone()),
            cliente_documento: client.map(|c| c.documento_identidad),
            aseguradora: policy.aseguradora,
            ramo: policy.ramo,
            detalle_riesgo: policy.detalle_riesgo,
            vigencia_desde: policy.vigencia_desde,
            vigencia_hasta: policy.vigencia_hasta,
            premio_uyu: policy.premio_uyu,
            premio_usd: policy.premio_usd,
            corredor: policy.corredor,
            agente: policy.agente,
            ejecutivo: policy.ejecutivo,
            archivo_url: policy.archivo_url,
        }
    }
}

/// Editable policy fields, used both by the intake endpoint and by the
/// editable-table reconciliation save.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PolicyFieldsDto {
    pub cliente_id: i32,
    pub aseguradora: String,
    pub ramo: String,
    pub detalle_riesgo: String,
    pub vigencia_desde: Option<NaiveDate>,
    pub vigencia_hasta: NaiveDate,
    pub premio_uyu: Option<Decimal>,
    pub premio_usd: Option<Decimal>,
    pub corredor: Option<String>,
    pub agente: Option<String>,
    pub ejecutivo: Option<String>,
    pub archivo_url: Option<String>,
}

/// One row of the editable policy table at save time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PolicyRowDto {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub fields: PolicyFieldsDto,
}

/// Bulk reconciliation save request for the policy roster.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReconcilePoliciesDto {
    pub before_ids: Vec<i32>,
    pub rows: Vec<PolicyRowDto>,
}

/// A lapsed-policy archive row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LapsedPolicyDto {
    pub id: i32,
    pub cliente_id: i32,
    pub cliente_nombre: Option<String>,
    pub aseguradora: String,
    pub ramo: String,
    pub detalle_riesgo: String,
    pub vigencia_desde: Option<NaiveDate>,
    pub vigencia_hasta: NaiveDate,
    pub premio_uyu: Option<Decimal>,
    pub premio_usd: Option<Decimal>,
    pub corredor: Option<String>,
    pub agente: Option<String>,
    pub ejecutivo: Option<String>,
    pub archivo_url: Option<String>,
    pub fecha_baja: chrono::NaiveDateTime,
}

impl From<(LapsedPolicyModel, Option<ClientModel>)> for LapsedPolicyDto {
    fn from((lapsed, client): (LapsedPolicyModel, Option<ClientModel>)) -> Self {
        Self {
            id: lapsed.id,
            cliente_id: lapsed.cliente_id,
            cliente_nombre: client.map(|c| c.nombre_completo),
            aseguradora: lapsed.aseguradora,
            ramo: lapsed.ramo,
            detalle_riesgo: lapsed.detalle_riesgo,
            vigencia_desde: lapsed.vigencia_desde,
            vigencia_hasta: lapsed.vigencia_hasta,
            premio_uyu: lapsed.premio_uyu,
            premio_usd: lapsed.premio_usd,
            corredor: lapsed.corredor,
            agente: lapsed.agente,
            ejecutivo: lapsed.ejecutivo,
            archivo_url: lapsed.archivo_url,
            fecha_baja: lapsed.fecha_baja,
        }
    }
}
