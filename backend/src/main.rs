//! Login API entry point.
//!
//! Loads settings, reads the user fixture once, and serves until shutdown.
//! Startup fails before binding if the fixture cannot be loaded.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use login_backend::inbound::http::health::HealthState;
use login_backend::outbound::load_user_directory;
use login_backend::server::{ServerConfig, create_server, drain};
use login_backend::settings::LoginSettings;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(error) = fmt().with_env_filter(filter).json().try_init() {
        warn!(%error, "tracing init failed");
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = LoginSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let users_path = settings.users_path();

    let directory = load_user_directory(&users_path)
        .wrap_err_with(|| format!("failed to load users from {}", users_path.display()))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, Arc::new(directory)),
    )
    .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("shutdown requested; draining");
                drain(health_state, handle).await;
            }
            Err(error) => warn!(%error, "failed to listen for shutdown signal"),
        }
    });

    info!(%bind_addr, "login API listening");
    server.await.wrap_err("server terminated with an error")
}
