use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::BatchOutcomeDto,
        policy::PolicyFieldsDto,
        renewal::{RenewPolicyDto, RenewalFilterOptionsDto, RenewalRowDto, RenewalStatusDto},
    },
    server::{
        data::{
            lapsed::LapsedPolicyRepository,
            policy::{PolicyRepository, RenewalFilters},
        },
        error::{renewal::RenewalError, Error},
    },
};

/// How far into the past overdue cases stay visible.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 90;
/// Default lookahead; the operator control ranges 15–180 days.
pub const DEFAULT_WINDOW_DAYS: i64 = 60;

/// The operator-tunable time window bounding the renewal working set.
/// Policies expiring outside `[today − lookback, today + window]` are
/// neither shown nor actionable.
#[derive(Debug, Clone, Copy)]
pub struct RenewalWindow {
    pub lookback_days: i64,
    pub window_days: i64,
}

impl Default for RenewalWindow {
    fn default() -> Self {
        Self {
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl RenewalWindow {
    pub fn new(lookback_days: i64, window_days: i64) -> Result<Self, RenewalError> {
        if lookback_days < 0 || window_days < 0 {
            return Err(RenewalError::InvalidWindow(format!(
                "lookback_days ({}) and window_days ({}) must be non-negative",
                lookback_days, window_days
            )));
        }

        Ok(Self {
            lookback_days,
            window_days,
        })
    }

    /// Inclusive date bounds of the working set relative to `today`.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (
            today - Duration::days(self.lookback_days),
            today + Duration::days(self.window_days),
        )
    }
}

/// A policy's derived urgency. Never stored; recomputed against `today`
/// every time the working set renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalStatus {
    Overdue { days: i64 },
    DueIn { days: i64 },
}

impl RenewalStatus {
    /// Classifies a coverage-end date against `today`. The boundary is
    /// strict: a policy expiring exactly today is due in 0 days, not
    /// overdue.
    pub fn classify(vigencia_hasta: NaiveDate, today: NaiveDate) -> Self {
        if vigencia_hasta < today {
            Self::Overdue {
                days: (today - vigencia_hasta).num_days(),
            }
        } else {
            Self::DueIn {
                days: (vigencia_hasta - today).num_days(),
            }
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, Self::Overdue { .. })
    }

    pub fn days(&self) -> i64 {
        match self {
            Self::Overdue { days } | Self::DueIn { days } => *days,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Overdue { days } => format!("OVERDUE ({} days)", days),
            Self::DueIn { days } => format!("DUE IN {} DAYS", days),
        }
    }
}

impl From<RenewalStatus> for RenewalStatusDto {
    fn from(status: RenewalStatus) -> Self {
        Self {
            overdue: status.is_overdue(),
            days: status.days(),
            label: status.label(),
        }
    }
}

pub struct RenewalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RenewalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The renewal working set: every policy expiring inside the window,
    /// classified and sorted soonest-due first, with the optional filters
    /// AND-combined on top.
    pub async fn working_set(
        &self,
        today: NaiveDate,
        window: RenewalWindow,
        filters: &RenewalFilters,
    ) -> Result<Vec<RenewalRowDto>, Error> {
        let policy_repo = PolicyRepository::new(self.db);

        let (from, to) = window.bounds(today);
        let rows = policy_repo.list_expiring(from, to, filters).await?;

        let rows = rows
            .into_iter()
            .map(|(policy, client)| RenewalRowDto {
                id: policy.id,
                cliente_id: policy.cliente_id,
                cliente_nombre: client.map(|c| c.nombre_completo),
                aseguradora: policy.aseguradora,
                ramo: policy.ramo,
                detalle_riesgo: policy.detalle_riesgo,
                status: RenewalStatus::classify(policy.vigencia_hasta, today).into(),
                vigencia_hasta: policy.vigencia_hasta,
                premio_uyu: policy.premio_uyu,
                premio_usd: policy.premio_usd,
                corredor: policy.corredor,
                agente: policy.agente,
                ejecutivo: policy.ejecutivo,
                archivo_url: policy.archivo_url,
            })
            .collect();

        Ok(rows)
    }

    /// Distinct dropdown options for the renewal view, scanned over the
    /// unfiltered policy table with blanks excluded.
    pub async fn filter_options(&self) -> Result<RenewalFilterOptionsDto, Error> {
        let policy_repo = PolicyRepository::new(self.db);

        Ok(RenewalFilterOptionsDto {
            ejecutivos: policy_repo
                .distinct_non_empty(entity::seguro::Column::Ejecutivo)
                .await?,
            aseguradoras: policy_repo
                .distinct_non_empty(entity::seguro::Column::Aseguradora)
                .await?,
            corredores: policy_repo
                .distinct_non_empty(entity::seguro::Column::Corredor)
                .await?,
            agentes: policy_repo
                .distinct_non_empty(entity::seguro::Column::Agente)
                .await?,
        })
    }

    /// RENEW: inserts one successor policy per edited row, copying the
    /// client, insurer, branch, risk, and intermediary fields and taking the
    /// operator-edited validity date, premiums, and document reference. The
    /// expiring originals are left untouched; they age out of the working
    /// set once past the lookback bound. Per-row failures are logged and
    /// counted, never aborting the batch.
    pub async fn renew_batch(&self, rows: &[RenewPolicyDto]) -> BatchOutcomeDto {
        let policy_repo = PolicyRepository::new(self.db);

        let mut processed = 0;
        let mut failed = 0;

        for row in rows {
            // The successor starts a fresh validity period; the original
            // system leaves the start date blank on renewal inserts.
            let fields = PolicyFieldsDto {
                cliente_id: row.cliente_id,
                aseguradora: row.aseguradora.clone(),
                ramo: row.ramo.clone(),
                detalle_riesgo: row.detalle_riesgo.clone(),
                vigencia_desde: None,
                vigencia_hasta: row.vigencia_hasta,
                premio_uyu: row.premio_uyu,
                premio_usd: row.premio_usd,
                corredor: row.corredor.clone(),
                agente: row.agente.clone(),
                ejecutivo: row.ejecutivo.clone(),
                archivo_url: row.archivo_url.clone(),
            };

            match policy_repo.create(&fields).await {
                Ok(_) => processed += 1,
                Err(err) => {
                    tracing::warn!(
                        "Failed to insert renewal for client {}: {}",
                        row.cliente_id,
                        err
                    );
                    failed += 1;
                }
            }
        }

        BatchOutcomeDto { processed, failed }
    }

    /// LAPSE ("no renueva"): archives each policy under `ex_seguros` and
    /// deletes it from the active book. Archive and delete run inside one
    /// transaction per row. Rows keep processing past failures.
    pub async fn lapse_batch(&self, ids: &[i32], fecha_baja: NaiveDateTime) -> BatchOutcomeDto {
        let mut processed = 0;
        let mut failed = 0;

        for &id in ids {
            match self.lapse_one(id, fecha_baja).await {
                Ok(()) => processed += 1,
                Err(err) => {
                    tracing::warn!("Failed to lapse policy {}: {}", id, err);
                    failed += 1;
                }
            }
        }

        BatchOutcomeDto { processed, failed }
    }

    async fn lapse_one(&self, id: i32, fecha_baja: NaiveDateTime) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let policy = PolicyRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or(RenewalError::PolicyNotFound(id))?;

        LapsedPolicyRepository::new(&txn)
            .create_from_policy(&policy, fecha_baja)
            .await?;
        PolicyRepository::new(&txn).delete_by_id(id).await?;

        txn.commit().await?;

        Ok(())
    }
}
