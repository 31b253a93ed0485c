//! Domain model for the pantry backend.
//!
//! Houses the entities, value objects, services, and ports that express the
//! application's behavior independently of HTTP or storage. Adapters in
//! [`crate::inbound`] and [`crate::outbound`] depend on this module, never
//! the other way round.

pub mod batch;
mod error;
pub mod item;
mod items_service;
mod outcome;
pub mod ports;
mod preferences_service;
pub mod user;
mod users_service;

pub use error::{Error, ErrorCode, ErrorValidationError};
pub use items_service::ItemService;
pub use outcome::MutationOutcome;
pub use preferences_service::{PreferenceOutcome, PreferenceService};
pub use users_service::UserService;
