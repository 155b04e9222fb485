//! HTTP handlers.
//!
//! Upload-path failures are always reported as HTTP 200 with
//! `{"error": ..., "success": false}` in the body, and id lookups that
//! miss return a body-only error as well. Clients inspect the body, not
//! the status code; see DESIGN.md for the compatibility rationale.

mod documents_api;
mod stats_api;
mod upload;

pub use documents_api::{delete_document, get_document, list_documents};
pub use stats_api::get_stats;
pub use upload::upload_document;

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Liveness message.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "DocScope backend - ready" }))
}
