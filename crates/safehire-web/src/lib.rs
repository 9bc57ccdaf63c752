//! SafeHire Web Server
//!
//! Axum-based server for the single-page message checker and its JSON API.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use safehire_core::Analyzer;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use state::AppState;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(routes::analyze::analyze))
        .route("/prompt", get(routes::page::prompt))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::page::index))
        .route("/health", get(routes::page::health))
        .nest("/api", api_routes)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(analyzer: Analyzer, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
