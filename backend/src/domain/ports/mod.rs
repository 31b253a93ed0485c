//! Domain ports and supporting types for the hexagonal boundary.

mod dietitian_token_query;
mod item_repository;
mod preference_repository;
mod user_repository;

#[cfg(test)]
pub use dietitian_token_query::MockDietitianTokenQuery;
pub use dietitian_token_query::{
    DietitianTokenError, DietitianTokenQuery, FixtureDietitianTokenQuery,
};
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{FixtureItemRepository, ItemRepository, ItemRepositoryError};
#[cfg(test)]
pub use preference_repository::MockPreferenceRepository;
pub use preference_repository::{
    FixturePreferenceRepository, PreferenceRepository, PreferenceRepositoryError,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
