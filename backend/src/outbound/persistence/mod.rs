//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL through `diesel-async` with `bb8` connection pooling. The
//! adapters stay thin: they translate between Diesel row structs and domain
//! types and map database failures onto the port error enums. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) never leak past this
//! module.

mod diesel_dietitian_token_query;
mod diesel_item_repository;
mod diesel_preference_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_dietitian_token_query::DieselDietitianTokenQuery;
pub use diesel_item_repository::DieselItemRepository;
pub use diesel_preference_repository::DieselPreferenceRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
