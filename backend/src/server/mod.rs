//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use pantry_backend::Trace;
use pantry_backend::domain::{ItemService, PreferenceService, UserService};
use pantry_backend::inbound::http::health::{HealthState, live, ready};
use pantry_backend::inbound::http::items::{
    add_items, add_items_manual, delete_items, get_items, update_items,
};
use pantry_backend::inbound::http::message_token::get_message_token;
use pantry_backend::inbound::http::preferences::add_preferences;
use pantry_backend::inbound::http::state::HttpState;
use pantry_backend::inbound::http::users::{add_user, delete_user, get_user, update_user};
use pantry_backend::outbound::persistence::{
    DieselDietitianTokenQuery, DieselItemRepository, DieselPreferenceRepository,
    DieselUserRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;

/// Build the shared HTTP state, database-backed when a pool is configured
/// and fixture-backed otherwise.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    match &config.db_pool {
        Some(pool) => web::Data::new(HttpState::new(
            UserService::new(Arc::new(DieselUserRepository::new(pool.clone()))),
            ItemService::new(Arc::new(DieselItemRepository::new(pool.clone()))),
            PreferenceService::new(Arc::new(DieselPreferenceRepository::new(pool.clone()))),
            Arc::new(DieselDietitianTokenQuery::new(pool.clone())),
        )),
        None => web::Data::new(HttpState::fixtures()),
    }
}

#[cfg(debug_assertions)]
async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(pantry_backend::ApiDoc::openapi())
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(add_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(get_items)
        .service(add_items)
        .service(add_items_manual)
        .service(update_items)
        .service(delete_items)
        .service(add_preferences)
        .service(get_message_token)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route("/api-docs/openapi.json", web::get().to(openapi_json));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
