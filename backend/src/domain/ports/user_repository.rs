//! Port for user account persistence.

use async_trait::async_trait;

use crate::domain::user::{NewUser, Uid, UserProfile, UserUpdate};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Adapter-supplied description.
        message: String,
    },
}

impl UserRepositoryError {
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

/// Port for user account storage.
///
/// Mutations report the affected-row count so callers can distinguish "no
/// rows matched" from an applied change; the distinction is part of the
/// delete endpoints' response contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the server-assigned identifier.
    async fn create(&self, user: &NewUser) -> Result<Uid, UserRepositoryError>;

    /// Fetch a profile by unique email, or `None` when the email is unknown.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserProfile>, UserRepositoryError>;

    /// Overwrite the stored messaging token, returning affected rows.
    async fn set_message_token(&self, uid: Uid, token: &str)
    -> Result<u64, UserRepositoryError>;

    /// Replace profile fields, returning affected rows.
    async fn update(&self, uid: Uid, update: &UserUpdate) -> Result<u64, UserRepositoryError>;

    /// Delete the user row, returning affected rows.
    async fn delete(&self, uid: Uid) -> Result<u64, UserRepositoryError>;
}

/// Fixture implementation for running the server without a database.
///
/// Lookups miss, mutations affect zero rows, and creation hands out a fixed
/// identifier. Use it in tests where user behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn create(&self, _user: &NewUser) -> Result<Uid, UserRepositoryError> {
        Ok(Uid::new(1))
    }

    async fn find_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<UserProfile>, UserRepositoryError> {
        Ok(None)
    }

    async fn set_message_token(
        &self,
        _uid: Uid,
        _token: &str,
    ) -> Result<u64, UserRepositoryError> {
        Ok(0)
    }

    async fn update(&self, _uid: Uid, _update: &UserUpdate) -> Result<u64, UserRepositoryError> {
        Ok(0)
    }

    async fn delete(&self, _uid: Uid) -> Result<u64, UserRepositoryError> {
        Ok(0)
    }
}
