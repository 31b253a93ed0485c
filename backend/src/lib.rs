//! Pantry backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds the services, value
//! objects, and ports; `inbound::http` adapts them to the legacy REST
//! contract; `outbound::persistence` implements the ports against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
/// Request tracing middleware, applied to the whole application.
pub use middleware::Trace;
