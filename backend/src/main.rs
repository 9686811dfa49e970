//! Service entry-point: loads settings, seeds the store and serves the REST
//! API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use resource_desk::inbound::http::health::HealthState;
use resource_desk::settings::AppSettings;
use resource_desk::startup::build_http_state;
use server::{ServerConfig, create_server};

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let http_state = build_http_state(&settings).map_err(|e| {
        error!(error = %e, "startup failed");
        std::io::Error::other(e.to_string())
    })?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::from(&settings);
    info!(addr = %config.bind_addr(), "starting resource desk");
    let server = create_server(health_state, http_state, config)?;
    server.await
}

#[cfg(test)]
mod tests;
