//! Social Backend
//!
//! A small REST backend for users, connection requests and posts, persisted as
//! JSON arrays on disk.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
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

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_tracing(&config);

    tracing::info!("Starting social backend");
    tracing::info!("Data directory: {:?}", config.data_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize storage
    let store = db::init_store(&config.data_dir).await?;
    let repo = Arc::new(Repository::new(store));

    let state = AppState { repo };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server is running on port -> {}", config.bind_addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes behind the auth gate
    let gated_routes = Router::new()
        // Users
        .route("/users", post(api::list_users))
        .route("/update-privacy", post(api::update_privacy))
        // Requests
        .route("/request", post(api::create_request))
        .route("/pending-requests", post(api::list_pending_requests))
        .route("/approve-request", post(api::approve_request))
        // Posts
        .route("/post", post(api::create_post))
        .route("/posts", post(api::list_posts))
        .route("/user-posts", post(api::list_user_posts))
        .route("/delete-post", post(api::delete_post))
        .route("/like-post", post(api::like_post))
        .route("/comment", post(api::comment_on_post))
        .layer(middleware::from_fn(auth::authenticate));

    // Open routes
    let open_routes = Router::new()
        .route("/register", post(api::register_user))
        .route("/login", post(api::login))
        .route("/health", get(health_check));

    Router::new()
        .merge(gated_routes)
        .merge(open_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
