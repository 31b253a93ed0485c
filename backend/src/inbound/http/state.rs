//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! domain services and ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DietitianTokenQuery, FixtureDietitianTokenQuery, FixtureItemRepository,
    FixturePreferenceRepository, FixtureUserRepository,
};
use crate::domain::{ItemService, PreferenceService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User account service.
    pub users: UserService,
    /// Pantry item service.
    pub items: ItemService,
    /// Dietary preference service.
    pub preferences: PreferenceService,
    /// Dietitian messaging-token lookup port.
    pub dietitians: Arc<dyn DietitianTokenQuery>,
}

impl HttpState {
    /// Bundle the services and the token lookup port.
    pub fn new(
        users: UserService,
        items: ItemService,
        preferences: PreferenceService,
        dietitians: Arc<dyn DietitianTokenQuery>,
    ) -> Self {
        Self {
            users,
            items,
            preferences,
            dietitians,
        }
    }

    /// State backed entirely by fixture ports.
    ///
    /// Used when the server starts without a database and by handler tests
    /// that only exercise validation.
    pub fn fixtures() -> Self {
        Self::new(
            UserService::new(Arc::new(FixtureUserRepository)),
            ItemService::new(Arc::new(FixtureItemRepository)),
            PreferenceService::new(Arc::new(FixturePreferenceRepository)),
            Arc::new(FixtureDietitianTokenQuery),
        )
    }
}
