//! Port for pantry item persistence.

use async_trait::async_trait;

use crate::domain::item::{Item, ItemChange, ItemId, NewItem};
use crate::domain::user::Uid;

/// Persistence errors raised by item repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemRepositoryError {
    /// Repository connection could not be established.
    #[error("item repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("item repository query failed: {message}")]
    Query {
        /// Adapter-supplied description.
        message: String,
    },
}

impl ItemRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for pantry item storage.
///
/// The batch services call these methods once per logical row; the port
/// itself is row-oriented and knows nothing about batches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert one item row for the given user.
    async fn insert(&self, uid: Uid, item: &NewItem) -> Result<(), ItemRepositoryError>;

    /// Apply one row's replacement fields, returning affected rows.
    async fn update(&self, uid: Uid, change: &ItemChange) -> Result<u64, ItemRepositoryError>;

    /// Delete one item row scoped to its owner, returning affected rows.
    async fn delete(&self, uid: Uid, item_id: ItemId) -> Result<u64, ItemRepositoryError>;

    /// All items belonging to the given user.
    async fn list_for_user(&self, uid: Uid) -> Result<Vec<Item>, ItemRepositoryError>;
}

/// Fixture implementation for running the server without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItemRepository;

#[async_trait]
impl ItemRepository for FixtureItemRepository {
    async fn insert(&self, _uid: Uid, _item: &NewItem) -> Result<(), ItemRepositoryError> {
        Ok(())
    }

    async fn update(&self, _uid: Uid, _change: &ItemChange) -> Result<u64, ItemRepositoryError> {
        Ok(0)
    }

    async fn delete(&self, _uid: Uid, _item_id: ItemId) -> Result<u64, ItemRepositoryError> {
        Ok(0)
    }

    async fn list_for_user(&self, _uid: Uid) -> Result<Vec<Item>, ItemRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn fixture_repository_accepts_inserts_and_lists_nothing() {
        let repo = FixtureItemRepository;
        let item = NewItem {
            upc: "068700115004".to_owned(),
            expire_date: "2023-12-31".parse().expect("valid date"),
            item_count: 2,
            item_name: None,
        };

        repo.insert(Uid::new(1), &item)
            .await
            .expect("fixture insert succeeds");
        let items = repo
            .list_for_user(Uid::new(1))
            .await
            .expect("fixture list succeeds");
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn fixture_repository_deletes_match_nothing() {
        let repo = FixtureItemRepository;
        assert_eq!(repo.delete(Uid::new(1), ItemId::new(4)).await, Ok(0));
    }

    #[rstest]
    fn error_constructors_format_messages() {
        let err = ItemRepositoryError::query("foreign key violation");
        assert!(err.to_string().contains("foreign key violation"));
    }
}
