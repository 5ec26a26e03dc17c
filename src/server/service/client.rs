use sea_orm::DatabaseConnection;

use crate::{
    model::{api::ReconcileOutcomeDto, client::ClientRowDto},
    server::{data::client::ClientRepository, service::reconcile::removed_ids},
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bulk reconciliation save over the client roster.
    ///
    /// Deletes every id that disappeared between the before and after
    /// snapshots, then unconditionally overwrites every surviving row with
    /// its current field values. Rows without an id were typed fresh into
    /// the table; this save does not create them. Per-statement failures are
    /// logged and counted, and the loop always runs to completion.
    pub async fn reconcile(
        &self,
        before_ids: &[i32],
        rows: &[ClientRowDto],
    ) -> ReconcileOutcomeDto {
        let client_repo = ClientRepository::new(self.db);

        let after_ids: Vec<i32> = rows.iter().filter_map(|row| row.id).collect();

        let mut deleted = 0;
        let mut updated = 0;
        let mut failed = 0;

        for id in removed_ids(before_ids, &after_ids) {
            match client_repo.delete_by_id(id).await {
                Ok(_) => deleted += 1,
                Err(err) => {
                    tracing::warn!("Failed to delete client {}: {}", id, err);
                    failed += 1;
                }
            }
        }

        for row in rows {
            let Some(id) = row.id else {
                continue;
            };

            match client_repo.update(id, &row.fields).await {
                Ok(_) => updated += 1,
                Err(err) => {
                    tracing::warn!("Failed to update client {}: {}", id, err);
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
