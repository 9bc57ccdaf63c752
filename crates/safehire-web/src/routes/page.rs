//! Page route handlers.
//!
//! Serves the embedded single-page checker.

use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the message checker page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// GET /api/prompt - The instruction sent with every message.
pub async fn prompt(State(state): State<AppState>) -> String {
    state.analyzer.instruction().to_string()
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
