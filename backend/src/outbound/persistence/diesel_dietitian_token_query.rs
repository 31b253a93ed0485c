//! PostgreSQL-backed `DietitianTokenQuery` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{DietitianTokenError, DietitianTokenQuery};

use super::pool::{DbPool, PoolError};
use super::schema::dietitians;

/// Diesel-backed implementation of the `DietitianTokenQuery` port.
#[derive(Clone)]
pub struct DieselDietitianTokenQuery {
    pool: DbPool,
}

impl DieselDietitianTokenQuery {
    /// Create a new query adapter over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DietitianTokenError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DietitianTokenError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> DietitianTokenError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(%error, "diesel dietitian token lookup failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DietitianTokenError::connection("database connection error")
        }
        other => DietitianTokenError::query(other.to_string()),
    }
}

#[async_trait]
impl DietitianTokenQuery for DieselDietitianTokenQuery {
    async fn find_message_token(&self, did: i64) -> Result<Option<String>, DietitianTokenError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        dietitians::table
            .filter(dietitians::did.eq(did))
            .select(dietitians::message_token)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_failures_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, DietitianTokenError::connection("timed out"));
    }

    #[rstest]
    fn other_diesel_failures_map_to_query_errors() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, DietitianTokenError::Query { .. }));
    }
}
