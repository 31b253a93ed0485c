//! PostgreSQL-backed `UserRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::user::{NewUser, Uid, UserProfile, UserUpdate};

use super::models::{NewUserRow, UserProfileChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(%error, "diesel user operation failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserRepositoryError::connection("database connection error")
        }
        other => UserRepositoryError::query(other.to_string()),
    }
}

fn row_to_profile(row: UserRow) -> UserProfile {
    UserProfile {
        uid: Uid::new(row.uid),
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        profile_url: row.profile_url,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<Uid, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            first_name: &user.first_name,
            last_name: &user.last_name,
            email: &user.email,
            profile_url: &user.profile_url,
            message_token: Some(&user.message_token),
        };

        let uid: i64 = diesel::insert_into(users::table)
            .values(&row)
            .returning(users::uid)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Uid::new(uid))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserProfile>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_profile))
    }

    async fn set_message_token(
        &self,
        uid: Uid,
        token: &str,
    ) -> Result<u64, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(users::table.filter(users::uid.eq(uid.value())))
            .set(users::message_token.eq(token))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected as u64)
    }

    async fn update(&self, uid: Uid, update: &UserUpdate) -> Result<u64, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = UserProfileChangeset {
            first_name: &update.first_name,
            last_name: &update.last_name,
            email: &update.email,
            profile_url: &update.profile_url,
        };

        let affected = diesel::update(users::table.filter(users::uid.eq(uid.value())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected as u64)
    }

    async fn delete(&self, uid: Uid) -> Result<u64, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(users::table.filter(users::uid.eq(uid.value())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_failures_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, UserRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn closed_connections_map_to_connection_errors() {
        let err = map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_owned()),
        ));
        assert!(matches!(err, UserRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn other_diesel_failures_map_to_query_errors() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, UserRepositoryError::Query { .. }));
    }

    #[rstest]
    fn rows_convert_to_profiles() {
        let profile = row_to_profile(UserRow {
            uid: 38,
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            email: "john.doe@example.com".to_owned(),
            profile_url: "https://example.com/profile.jpg".to_owned(),
            message_token: Some("someToken".to_owned()),
        });
        assert_eq!(profile.uid, Uid::new(38));
        assert_eq!(profile.email, "john.doe@example.com");
    }
}
