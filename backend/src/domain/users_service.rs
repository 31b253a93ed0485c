//! User account domain service.
//!
//! Translates repository results into domain outcomes: lookups surface
//! `Option`, mutations surface [`MutationOutcome`], and collaborator errors
//! become [`ErrorCode::StorageFailure`](crate::domain::ErrorCode) uniformly.

use std::sync::Arc;

use crate::domain::Error;
use crate::domain::outcome::MutationOutcome;
use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::user::{NewUser, Uid, UserProfile, UserUpdate};

/// User account service dispatching to the storage collaborator.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

fn map_repo_error(error: UserRepositoryError) -> Error {
    Error::storage(format!("user repository error: {error}"))
}

impl UserService {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Register a new account, returning the server-assigned identifier.
    pub async fn register(&self, user: &NewUser) -> Result<Uid, Error> {
        self.repo.create(user).await.map_err(map_repo_error)
    }

    /// Resolve a profile by email, refreshing the stored messaging token.
    ///
    /// The token refresh mirrors the mobile client's contract: every
    /// credential lookup carries the device's current token, and the stored
    /// one is replaced before the profile is returned. A miss returns
    /// `Ok(None)`; the HTTP adapter decides the status code per endpoint.
    pub async fn profile_for_credentials(
        &self,
        email: &str,
        token: &str,
    ) -> Result<Option<UserProfile>, Error> {
        let Some(profile) = self
            .repo
            .find_by_email(email)
            .await
            .map_err(map_repo_error)?
        else {
            return Ok(None);
        };

        self.repo
            .set_message_token(profile.uid, token)
            .await
            .map_err(map_repo_error)?;
        Ok(Some(profile))
    }

    /// Replace an account's profile fields.
    pub async fn update_profile(
        &self,
        uid: Uid,
        update: &UserUpdate,
    ) -> Result<MutationOutcome, Error> {
        let affected = self
            .repo
            .update(uid, update)
            .await
            .map_err(map_repo_error)?;
        Ok(MutationOutcome::from_affected(affected))
    }

    /// Delete an account. Items and preferences are left untouched; user
    /// lifecycle is independent of theirs.
    pub async fn remove(&self, uid: Uid) -> Result<MutationOutcome, Error> {
        let affected = self.repo.delete(uid).await.map_err(map_repo_error)?;
        Ok(MutationOutcome::from_affected(affected))
    }
}
