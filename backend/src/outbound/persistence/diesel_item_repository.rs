//! PostgreSQL-backed `ItemRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::item::{Item, ItemChange, ItemId, NewItem};
use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::user::Uid;

use super::models::{ItemChangeset, ItemRow, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::items;

/// Diesel-backed implementation of the `ItemRepository` port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ItemRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ItemRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ItemRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(%error, "diesel item operation failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ItemRepositoryError::connection("database connection error")
        }
        other => ItemRepositoryError::query(other.to_string()),
    }
}

fn row_to_item(row: ItemRow) -> Item {
    Item {
        item_id: ItemId::new(row.item_id),
        upc: row.upc,
        expire_date: row.expire_date,
        item_count: row.item_count,
        item_name: row.item_name,
    }
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn insert(&self, uid: Uid, item: &NewItem) -> Result<(), ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewItemRow {
            uid: uid.value(),
            upc: &item.upc,
            expire_date: item.expire_date,
            item_count: item.item_count,
            item_name: item.item_name.as_deref(),
        };

        diesel::insert_into(items::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn update(&self, uid: Uid, change: &ItemChange) -> Result<u64, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = ItemChangeset {
            upc: &change.upc,
            expire_date: change.expire_date,
            item_count: change.item_count,
        };

        let affected = diesel::update(
            items::table
                .filter(items::item_id.eq(change.item_id.value()))
                .filter(items::uid.eq(uid.value())),
        )
        .set(&changes)
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(affected as u64)
    }

    async fn delete(&self, uid: Uid, item_id: ItemId) -> Result<u64, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(
            items::table
                .filter(items::item_id.eq(item_id.value()))
                .filter(items::uid.eq(uid.value())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(affected as u64)
    }

    async fn list_for_user(&self, uid: Uid) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRow> = items::table
            .filter(items::uid.eq(uid.value()))
            .order(items::item_id.asc())
            .select(ItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_item).collect())
    }
}
