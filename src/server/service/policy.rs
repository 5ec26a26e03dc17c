use sea_orm::DatabaseConnection;

use crate::{
    model::{api::ReconcileOutcomeDto, policy::PolicyRowDto},
    server::{data::policy::PolicyRepository, service::reconcile::removed_ids},
};

pub struct PolicyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PolicyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bulk reconciliation save over the policy book; same contract as the
    /// client roster save: delete-by-absence, unconditional updates for
    /// surviving rows, id-less rows ignored, loop never stops early.
    pub async fn reconcile(
        &self,
        before_ids: &[i32],
        rows: &[PolicyRowDto],
    ) -> ReconcileOutcomeDto {
        let policy_repo = PolicyRepository::new(self.db);

        let after_ids: Vec<i32> = rows.iter().filter_map(|row| row.id).collect();

        let mut deleted = 0;
        let mut updated = 0;
        let mut failed = 0;

        for id in removed_ids(before_ids, &after_ids) {
            match policy_repo.delete_by_id(id).await {
                Ok(_) => deleted += 1,
                Err(err) => {
                    tracing::warn!("Failed to delete policy {}: {}", id, err);
                    failed += 1;
                }
            }
        }

        for row in rows {
            let Some(id) = row.id else {
                continue;
            };

            match policy_repo.update(id, &row.fields).await {
                Ok(_) => updated += 1,
                Err(err) => {
                    tracing::warn!("Failed to update policy {}: {}", id, err);
                    failed += 1;
                }
            }
        }

        ReconcileOutcomeDto {
            deleted,
            updated,
            failed,
        }
    }
}
