//! Student Registry
//!
//! A small REST service holding student records and their class grades in
//! process memory, with endpoints to list, look up, create, delete, grade
//! and compute GPAs.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod error;
mod logging;
mod storage;

use crate::api::build_router;
use crate::config::Config;
use crate::storage::{InMemoryStudentRepository, StudentRepository};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Student storage.
    pub repository: Arc<dyn StudentRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting Student Registry v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        seed = %config.seed.enabled,
        "Configuration loaded"
    );

    let repository = if config.seed.enabled {
        InMemoryStudentRepository::with_students(domain::seed_students())
    } else {
        InMemoryStudentRepository::new()
    };

    tracing::info!(students = repository.count()?, "Student store ready");

    let state = AppState {
        repository: Arc::new(repository),
    };

    let app = build_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
