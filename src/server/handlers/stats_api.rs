//! Aggregate statistics endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::super::AppState;
use crate::stats;

/// Per-category counts and the best-effort expense total.
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    match state.doc_repo.get_all().await {
        Ok(docs) => Json(serde_json::to_value(stats::aggregate(&docs)).unwrap_or_default()),
        Err(e) => Json(json!({ "error": e.to_string() })),
    }
}
