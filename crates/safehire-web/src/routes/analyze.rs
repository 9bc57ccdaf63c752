//! Analysis route handlers.

use axum::{extract::State, http::StatusCode, Json};
use safehire_core::{AnalysisRequest, AnalysisResponse, SafeHireError};
use tracing::warn;

use crate::state::AppState;

/// POST /api/analyze - Run one message through the oracle.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, (StatusCode, String)> {
    let response = state.analyzer.analyze(&req).await.map_err(|e| {
        let status = match &e {
            SafeHireError::EmptyMessage => StatusCode::BAD_REQUEST,
            SafeHireError::Oracle(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(%status, error = %e, "Analysis request failed");
        (status, e.to_string())
    })?;

    Ok(Json(response))
}
