//! Server entry-point: loads settings, wires adapters and serves the API.

mod server;

use std::ffi::OsString;

use ortho_config::OrthoConfig as _;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use signup::config::AppSettings;
use signup::outbound::persistence::{DbPool, PoolConfig};

use server::{ServerConfig, create_server};

/// Install the JSON subscriber. No subscriber exists yet to log a failure,
/// so it is returned to the caller.
fn init_tracing() -> std::io::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
        .map_err(|e| std::io::Error::other(format!("tracing init failed: {e}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing()?;

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr, settings.hashing_costs())
        .with_conflict_text_fallback(settings.conflict_text_fallback());

    if let Some(url) = settings.database_url() {
        let pool_config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
        let pool = DbPool::connect(&pool_config)
            .await
            .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
        config = config.with_db_pool(pool);
    }

    info!(%bind_addr, "starting registration server");
    create_server(config)?.await
}
