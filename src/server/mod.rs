//! HTTP Server Module
//!
//! Wires the todo handlers to their routes and runs the serve loop.
//!
//! ## Middleware (outermost first)
//! - **`track_requests`**: tags the request with a tracking token (`RequestId`).
//! - **`log_requests`**: logs method, path, status, tracking token and latency.

pub mod logging;

use crate::config::Config;
use crate::session::tracker::{RequestTracker, track_requests};
use crate::todos::handlers::{
    AppState, handle_create_todo, handle_delete_todo, handle_index, handle_stylesheet,
};
use crate::todos::store::TodoStore;

use anyhow::{Context, Result};
use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const TRACKER_NAME: &str = "todo";

pub fn build_router(state: AppState, tracker: Arc<RequestTracker>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/todo", post(handle_create_todo))
        .route("/todo/:id", delete(handle_delete_todo))
        .route("/main.css", get(handle_stylesheet))
        .with_state(state)
        .layer(middleware::from_fn(logging::log_requests))
        .layer(middleware::from_fn_with_state(tracker, track_requests))
}

/// Builds the application for `config` with a fresh, empty store.
pub fn app(config: &Config) -> Router {
    let state = AppState {
        store: Arc::new(TodoStore::new()),
        partition: config.partition,
        static_dir: config.static_dir.clone(),
    };

    build_router(state, RequestTracker::new(TRACKER_NAME))
}

/// Serves `router` on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("HTTP server stopped")?;

    Ok(())
}

pub async fn run(config: Config) -> Result<()> {
    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("serving on {}", addr);
    tracing::info!("Partition mode: {:?}", config.partition);

    serve(listener, app(&config)).await
}
