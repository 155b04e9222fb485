//! Stored document listing, lookup, and deletion endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use super::super::AppState;
use crate::models::Document;

/// Compact row for the listing endpoint.
#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub id: i32,
    pub filename: String,
    pub pages: i32,
    pub tipo_documento: Option<String>,
    pub fecha: Option<String>,
    pub emisor: Option<String>,
    pub total: Option<String>,
    pub moneda: Option<String>,
    pub resumen: Option<String>,
    pub created_at: String,
}

/// Full document detail.
#[derive(Debug, Serialize)]
pub struct DocumentDetail {
    pub id: i32,
    pub filename: String,
    pub pages: i32,
    pub text_preview: String,
    pub tipo_documento: Option<String>,
    pub fecha: Option<String>,
    pub emisor: Option<String>,
    pub receptor: Option<String>,
    pub total: Option<String>,
    pub moneda: Option<String>,
    pub rfc_emisor: Option<String>,
    pub conceptos: Option<String>,
    pub subtotal: Option<String>,
    pub iva: Option<String>,
    pub resumen: Option<String>,
    pub created_at: String,
}

impl From<Document> for DocumentSummary {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            filename: doc.filename,
            pages: doc.pages,
            tipo_documento: doc.tipo_documento,
            fecha: doc.fecha,
            emisor: doc.emisor,
            total: doc.total,
            moneda: doc.moneda,
            resumen: doc.resumen,
            created_at: doc.created_at.to_rfc3339(),
        }
    }
}

impl From<Document> for DocumentDetail {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            filename: doc.filename,
            pages: doc.pages,
            text_preview: doc.text_preview,
            tipo_documento: doc.tipo_documento,
            fecha: doc.fecha,
            emisor: doc.emisor,
            receptor: doc.receptor,
            total: doc.total,
            moneda: doc.moneda,
            rfc_emisor: doc.rfc_emisor,
            conceptos: doc.conceptos,
            subtotal: doc.subtotal,
            iva: doc.iva,
            resumen: doc.resumen,
            created_at: doc.created_at.to_rfc3339(),
        }
    }
}

/// List all stored documents, newest first.
pub async fn list_documents(State(state): State<AppState>) -> impl IntoResponse {
    match state.doc_repo.get_all().await {
        Ok(docs) => {
            let total = state
                .doc_repo
                .count()
                .await
                .unwrap_or(docs.len() as u64);
            let documents: Vec<DocumentSummary> =
                docs.into_iter().map(DocumentSummary::from).collect();
            Json(json!({ "documents": documents, "total": total }))
        }
        Err(e) => Json(json!({ "error": e.to_string() })),
    }
}

/// Get one document by id.
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.doc_repo.get(id).await {
        Ok(Some(doc)) => Json(serde_json::to_value(DocumentDetail::from(doc)).unwrap_or_default()),
        Ok(None) => Json(json!({ "error": "Document not found" })),
        Err(e) => Json(json!({ "error": e.to_string() })),
    }
}

/// Delete one document by id.
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.doc_repo.delete(id).await {
        Ok(true) => Json(json!({ "message": "Document deleted", "success": true })),
        Ok(false) => Json(json!({ "error": "Document not found" })),
        Err(e) => Json(json!({ "error": e.to_string() })),
    }
}
