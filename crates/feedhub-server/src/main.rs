//! Feedhub Server
//!
//! HTTP API over users, posts, profiles and member types, backed by an
//! in-memory store.

mod config;
mod handlers;
mod services;
mod storage;


use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use feedhub_core::FeedStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::ServerConfig;
use services::{MemberTypeService, PostService, ProfileService, UserService};
use storage::MemoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub posts: Arc<PostService>,
    pub profiles: Arc<ProfileService>,
    pub member_types: Arc<MemberTypeService>,
}

impl AppState {
    pub fn new(store: Arc<dyn FeedStore>) -> Self {
        Self {
            users: Arc::new(UserService::new(store.clone())),
            posts: Arc::new(PostService::new(store.clone())),
            profiles: Arc::new(ProfileService::new(store.clone())),
            member_types: Arc::new(MemberTypeService::new(store)),
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let config = ServerConfig::parse();

    // Initialize tracing, RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Feedhub Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Config loaded: bind={}, seed={}", config.bind_address, !config.no_seed);

    let store: Arc<dyn FeedStore> = Arc::new(MemoryStore::new());
    let state = AppState::new(store);

    if !config.no_seed {
        state
            .member_types
            .seed_defaults()
            .await
            .context("Failed to seed member types")?;
    }

    let app = build_router(state);

    info!("Server listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    use handlers::{member_types, posts, profiles, users};

    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:id",
            get(users::get).patch(users::update).delete(users::delete),
        )
        .route("/users/:id/subscribeTo", post(users::subscribe_to))
        .route("/users/:id/unsubscribeFrom", post(users::unsubscribe_from))
        .route("/posts", get(posts::list).post(posts::create))
        .route(
            "/posts/:id",
            get(posts::get).patch(posts::update).delete(posts::delete),
        )
        .route("/profiles", get(profiles::list).post(profiles::create))
        .route(
            "/profiles/:id",
            get(profiles::get)
                .patch(profiles::update)
                .delete(profiles::delete),
        )
        .route("/member-types", get(member_types::list))
        .route(
            "/member-types/:id",
            get(member_types::get).patch(member_types::update),
        )
}
