//! Pantry item domain service.
//!
//! Dispatches one storage call per logical row, in submission order. There is
//! no batch atomicity: a storage failure aborts the remaining rows but rows
//! dispatched earlier stay written, matching the best-effort contract.

use std::sync::Arc;

use tracing::warn;

use crate::domain::Error;
use crate::domain::batch::{BatchReport, RowOutcome};
use crate::domain::item::{Item, ItemBatch, ItemId, ItemUpdateBatch};
use crate::domain::outcome::MutationOutcome;
use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::user::Uid;

/// Pantry item service dispatching reconciled batches row by row.
#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

fn map_repo_error(error: ItemRepositoryError) -> Error {
    Error::storage(format!("item repository error: {error}"))
}

impl ItemService {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    /// Insert every row of a reconciled batch, returning the rows written.
    ///
    /// An empty batch writes nothing and succeeds with zero rows.
    pub async fn add_batch(&self, batch: &ItemBatch) -> Result<usize, Error> {
        let uid = batch.uid();
        for (index, row) in batch.rows().iter().enumerate() {
            if let Err(error) = self.repo.insert(uid, row).await {
                warn!(%uid, index, %error, "item batch insert aborted");
                return Err(map_repo_error(error));
            }
        }
        Ok(batch.rows().len())
    }

    /// Apply every row of a reconciled update batch.
    ///
    /// Rows whose item id matches nothing are recorded as
    /// [`RowOutcome::NoRowsMatched`] and do not abort the batch.
    pub async fn update_batch(&self, batch: &ItemUpdateBatch) -> Result<BatchReport, Error> {
        let uid = batch.uid();
        let mut report = BatchReport::default();
        for (index, change) in batch.rows().iter().enumerate() {
            match self.repo.update(uid, change).await {
                Ok(affected) => report.record(if affected == 0 {
                    RowOutcome::NoRowsMatched
                } else {
                    RowOutcome::Applied
                }),
                Err(error) => {
                    warn!(%uid, index, %error, "item batch update aborted");
                    return Err(map_repo_error(error));
                }
            }
        }
        Ok(report)
    }

    /// Delete the listed items, classifying the combined affected count.
    pub async fn delete_items(
        &self,
        uid: Uid,
        item_ids: &[ItemId],
    ) -> Result<MutationOutcome, Error> {
        let mut total: u64 = 0;
        for (index, item_id) in item_ids.iter().enumerate() {
            match self.repo.delete(uid, *item_id).await {
                Ok(affected) => total += affected,
                Err(error) => {
                    warn!(%uid, index, %error, "item batch delete aborted");
                    return Err(map_repo_error(error));
                }
            }
        }
        Ok(MutationOutcome::from_affected(total))
    }

    /// All items belonging to the given user.
    pub async fn list(&self, uid: Uid) -> Result<Vec<Item>, Error> {
        self.repo.list_for_user(uid).await.map_err(map_repo_error)
    }
}
