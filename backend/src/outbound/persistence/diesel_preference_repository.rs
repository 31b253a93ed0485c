//! PostgreSQL-backed `PreferenceRepository` implementation.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PreferenceRepository, PreferenceRepositoryError};
use crate::domain::user::Uid;

use super::models::NewPreferenceRow;
use super::pool::{DbPool, PoolError};
use super::schema::preferences;

/// Diesel-backed implementation of the `PreferenceRepository` port.
#[derive(Clone)]
pub struct DieselPreferenceRepository {
    pool: DbPool,
}

impl DieselPreferenceRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PreferenceRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PreferenceRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> PreferenceRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(%error, "diesel preference operation failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PreferenceRepositoryError::connection("database connection error")
        }
        other => PreferenceRepositoryError::query(other.to_string()),
    }
}

#[async_trait]
impl PreferenceRepository for DieselPreferenceRepository {
    async fn insert(&self, uid: Uid, preference: &str) -> Result<(), PreferenceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewPreferenceRow {
            uid: uid.value(),
            preference,
        };

        diesel::insert_into(preferences::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_failures_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, PreferenceRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn other_diesel_failures_map_to_query_errors() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, PreferenceRepositoryError::Query { .. }));
    }
}
