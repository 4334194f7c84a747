//! Backend entry-point: wires the public pages, contact form, and health
//! probes onto an Actix HTTP server.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use server::{AppConfig, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::load().wrap_err("failed to load configuration")?;
    let bind_addr = config.bind_addr().wrap_err("invalid bind address")?;

    let mut server_config = ServerConfig::new(bind_addr);
    match &config.database_url {
        Some(url) => {
            let pool_config =
                PoolConfig::new(url.clone()).with_max_size(config.pool_max_size());
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("failed to build database pool")?;
            server_config = server_config.with_db_pool(pool);
        }
        None => {
            warn!("no database URL configured; serving built-in sample content");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, server_config)
        .wrap_err("failed to start HTTP server")?;
    info!(%bind_addr, "listening");
    server.await.wrap_err("server terminated with error")
}
