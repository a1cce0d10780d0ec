//! Multi-list to-do backend and client.
//!
//! The server side is a REST API over SQLite; the client side is a typed
//! data-access layer plus view models that derive active and completed
//! items from the last fetched snapshot.

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod views;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Lists
        .route(
            "/todolists",
            get(api::list_todo_lists).post(api::create_todo_list),
        )
        .route(
            "/todolists/{list_id}",
            get(api::get_todo_list).delete(api::delete_todo_list),
        )
        // Items
        .route(
            "/todolists/{list_id}/todos",
            get(api::list_todos).post(api::create_todo),
        )
        .route(
            "/todolists/{list_id}/todos/{todo_id}",
            patch(api::update_todo).delete(api::delete_todo),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(api::route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(log_level: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Open the store and build the shared state.
pub async fn build_state(config: &Config) -> Result<AppState, sqlx::Error> {
    let pool = db::init_database(&config.db_path).await?;
    Ok(AppState {
        repo: Arc::new(Repository::new(pool)),
    })
}
