//! Backend entry-point: wires REST endpoints, persistence, and OpenAPI docs.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pantry_backend::inbound::http::health::HealthState;
use pantry_backend::outbound::persistence::{DbPool, PoolConfig};
use server::ServerConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

fn bind_addr_from_env() -> std::io::Result<SocketAddr> {
    let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    raw.parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR '{raw}': {e}")))
}

async fn db_pool_from_env() -> std::io::Result<Option<DbPool>> {
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
            Ok(Some(pool))
        }
        Err(_) => {
            warn!("DATABASE_URL not set; serving fixture data only");
            Ok(None)
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = bind_addr_from_env()?;
    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool) = db_pool_from_env().await? {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, config)?;
    info!(%bind_addr, "server listening");
    server.await
}
