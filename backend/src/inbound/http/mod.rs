//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod items;
pub mod message_token;
pub mod preferences;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Body returned by both delete endpoints when the mutation matched nothing.
pub(crate) const NO_ROWS_DELETED_BODY: &str =
    "No rows were deleted. Check the values in your DELETE query.";
