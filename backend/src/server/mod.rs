//! Server construction and middleware wiring.

mod config;

pub use config::{AppConfig, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::pages::not_found;
use backend::inbound::http::state::PagesState;
use backend::inbound::http::{contact, pages};
use backend::outbound::persistence::{
    DieselContactMessageRepository, DieselContentRepository, DieselSettingsRepository,
};

/// Build the page handler state from configuration: Diesel adapters when a
/// pool is available, sample-content fixtures otherwise.
fn build_pages_state(config: &ServerConfig) -> std::io::Result<PagesState> {
    let state = match &config.db_pool {
        Some(pool) => PagesState::new(
            Arc::new(DieselContentRepository::new(pool.clone())),
            Arc::new(DieselContactMessageRepository::new(pool.clone())),
            Arc::new(DieselSettingsRepository::new(pool.clone())),
        ),
        None => PagesState::fixtures(),
    };
    state.map_err(|error| std::io::Error::other(format!("template registry failed: {error}")))
}

fn build_app(
    health_state: web::Data<HealthState>,
    pages_state: web::Data<PagesState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(pages_state)
        .wrap(Trace)
        .configure(pages::configure)
        .configure(contact::configure)
        .service(ready)
        .service(live)
        .default_service(web::to(not_found))
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when state construction or binding the
/// socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let pages_state = web::Data::new(build_pages_state(&config)?);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), pages_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
