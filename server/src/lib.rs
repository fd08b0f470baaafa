//! Nodebucket Backend
//!
//! Layered architecture:
//! - domain: Employee task document and items
//! - repository: Task store trait and its SQLite implementation
//! - api: axum handlers and router
//! - config: environment configuration

use std::sync::Arc;

use anyhow::Context;

pub mod api;
pub mod config;
pub mod domain;
pub mod repository;

use config::ServerConfig;
use repository::{load_seed_file, seed_employees, DbPool, EmployeeRepository, TaskStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }
}

/// Open the store, apply the seed file and serve until ctrl-c
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let (db_path, pool_size) = (config.db_path.clone(), config.pool_size);
    let pool = tokio::task::spawn_blocking(move || DbPool::open(db_path, pool_size))
        .await
        .context("database open task failed")?
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    let pool = Arc::new(pool);
    let repo = EmployeeRepository::new(pool.clone());

    if let Some(seed_file) = &config.seed_file {
        let employees = load_seed_file(seed_file)?;
        seed_employees(&repo, &employees).await?;
    }

    let state = AppState::new(Arc::new(repo));
    let app = api::create_router(state, config.static_dir.as_deref());

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    log::info!("Nodebucket API listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close();
    log::info!("Nodebucket API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
