mod routes;
mod singleton;
mod state;

use anyhow::Result;
use scheduler_core::SchedulerConfig;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = SchedulerConfig::load()?;

    // Ensure only one instance is writing to the database
    let _lock = singleton::acquire_lock(&config.db_file)?;

    let state = AppState::open(&config.db_file)?;
    let app = routes::app(state, &config.web_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        "scheduler-server listening on http://{} (db: {}, web: {})",
        addr,
        config.db_file.display(),
        config.web_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
