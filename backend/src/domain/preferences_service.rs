//! Dietary preference domain service.

use std::sync::Arc;

use tracing::warn;

use crate::domain::Error;
use crate::domain::ports::{PreferenceRepository, PreferenceRepositoryError};
use crate::domain::user::Uid;

/// Result of submitting a preference batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceOutcome {
    /// Every submitted preference was stored.
    Added(usize),
    /// The submission carried no preferences at all.
    NothingToAdd,
}

/// Dietary preference service appending labels to a user's profile.
#[derive(Clone)]
pub struct PreferenceService {
    repo: Arc<dyn PreferenceRepository>,
}

fn map_repo_error(error: PreferenceRepositoryError) -> Error {
    Error::storage(format!("preference repository error: {error}"))
}

impl PreferenceService {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Store each preference label for the user, in submission order.
    ///
    /// Duplicate labels are stored again; the model is append-only. An empty
    /// list is reported as [`PreferenceOutcome::NothingToAdd`] so the HTTP
    /// adapter can answer with its dedicated body.
    pub async fn add_preferences(
        &self,
        uid: Uid,
        preferences: &[String],
    ) -> Result<PreferenceOutcome, Error> {
        if preferences.is_empty() {
            return Ok(PreferenceOutcome::NothingToAdd);
        }
        for (index, preference) in preferences.iter().enumerate() {
            if let Err(error) = self.repo.insert(uid, preference).await {
                warn!(%uid, index, %error, "preference insert aborted");
                return Err(map_repo_error(error));
            }
        }
        Ok(PreferenceOutcome::Added(preferences.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockPreferenceRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn every_preference_is_stored_in_order() {
        let uid = Uid::new(4);
        let mut repo = MockPreferenceRepository::new();
        for label in ["vegan", "gluten-free"] {
            repo.expect_insert()
                .with(eq(uid), eq(label))
                .times(1)
                .returning(|_, _| Ok(()));
        }

        let service = PreferenceService::new(Arc::new(repo));
        let outcome = service
            .add_preferences(
                uid,
                &["vegan".to_owned(), "gluten-free".to_owned()],
            )
            .await
            .expect("inserts succeed");
        assert_eq!(outcome, PreferenceOutcome::Added(2));
    }

    #[tokio::test]
    async fn an_empty_submission_touches_nothing() {
        let mut repo = MockPreferenceRepository::new();
        repo.expect_insert().times(0);

        let service = PreferenceService::new(Arc::new(repo));
        let outcome = service
            .add_preferences(Uid::new(4), &[])
            .await
            .expect("empty submission succeeds");
        assert_eq!(outcome, PreferenceOutcome::NothingToAdd);
    }

    #[tokio::test]
    async fn a_storage_failure_aborts_the_batch() {
        let mut repo = MockPreferenceRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_, _| Err(PreferenceRepositoryError::query("insert failed")));

        let service = PreferenceService::new(Arc::new(repo));
        let error = service
            .add_preferences(Uid::new(4), &["vegan".to_owned(), "keto".to_owned()])
            .await
            .expect_err("first insert fails");
        assert_eq!(error.code(), ErrorCode::StorageFailure);
    }
}
