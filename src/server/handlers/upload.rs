//! PDF upload and analysis endpoint.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::warn;

use super::super::AppState;

/// Analyze an uploaded PDF and persist the result.
///
/// Expects a multipart form with a `file` field. Every failure mode is
/// encoded in the body with `success: false`; the status stays 200.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut filename = "unknown".to_string();
    let mut data: Option<Bytes> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                if let Some(name) = field.file_name() {
                    filename = name.to_string();
                }
                match field.bytes().await {
                    Ok(bytes) => {
                        data = Some(bytes);
                        break;
                    }
                    Err(e) => return Json(error_body(&filename, &e.to_string())),
                }
            }
            Ok(None) => break,
            Err(e) => return Json(error_body(&filename, &e.to_string())),
        }
    }

    let Some(bytes) = data else {
        return Json(error_body(&filename, "missing multipart field `file`"));
    };

    let analyzed = match state.analyzer.analyze(&filename, &bytes).await {
        Ok(analyzed) => analyzed,
        Err(e) => {
            warn!(%filename, error = %e, "analysis failed");
            return Json(error_body(&filename, &e.to_string()));
        }
    };

    let document_id = match state
        .doc_repo
        .save(
            &filename,
            analyzed.pages,
            &analyzed.text_preview,
            analyzed.detected_type,
            &analyzed.stored,
        )
        .await
    {
        Ok(id) => id,
        Err(e) => {
            warn!(%filename, error = %e, "persisting analysis failed");
            return Json(error_body(&filename, &e.to_string()));
        }
    };

    Json(json!({
        "filename": filename,
        "pages": analyzed.pages,
        "text_preview": analyzed.text_preview,
        "analysis": analyzed.analysis,
        "detected_type": analyzed.detected_type.as_str(),
        "success": true,
        "document_id": document_id,
    }))
}

fn error_body(filename: &str, error: &str) -> serde_json::Value {
    json!({ "error": error, "filename": filename, "success": false })
}
