//! Taskhub Task API
//!
//! Multi-tenant task-tracking service: account registration, bearer token
//! issuance, and per-account task CRUD over PostgreSQL.

mod config;
mod error;
mod extractors;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use taskhub_auth_core::AuthService;
use taskhub_tasks_core::TaskService;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Taskhub Task API");

    let config = Config::from_env()?;

    // Database pool and repositories
    let pool = taskhub_db::create_pool(&config.database_url, config.pool).await?;
    let repos = taskhub_db::Repositories::new(pool.clone());

    // Services
    let auth = AuthService::new(config.auth.clone(), Arc::new(repos.users));
    let tasks = TaskService::new(Arc::new(repos.tasks));

    let state = AppState::new(auth, tasks, pool);
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/token", post(handlers::auth::token))
        .route(
            "/api/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route("/api/tasks/{task_id}", patch(handlers::tasks::update_task))
        .with_state(state)
}
