//! Port for dietary preference persistence.

use async_trait::async_trait;

use crate::domain::user::Uid;

/// Persistence errors raised by preference repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceRepositoryError {
    /// Repository connection could not be established.
    #[error("preference repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("preference repository query failed: {message}")]
    Query {
        /// Adapter-supplied description.
        message: String,
    },
}

impl PreferenceRepositoryError {
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

/// Port for dietary preference storage.
///
/// Preferences are append-only; the contract defines no update or delete
/// operation for them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Record one preference string for the given user.
    async fn insert(&self, uid: Uid, preference: &str) -> Result<(), PreferenceRepositoryError>;
}

/// Fixture implementation for running the server without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePreferenceRepository;

#[async_trait]
impl PreferenceRepository for FixturePreferenceRepository {
    async fn insert(&self, _uid: Uid, _preference: &str) -> Result<(), PreferenceRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_repository_accepts_inserts() {
        let repo = FixturePreferenceRepository;
        repo.insert(Uid::new(1), "Vegan")
            .await
            .expect("fixture insert succeeds");
    }
}
