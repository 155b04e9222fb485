//! Web server for uploading and browsing analyzed documents.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::LlmClient;
use crate::repository::DocumentRepository;
use crate::services::DocumentAnalyzer;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub doc_repo: Arc<DocumentRepository>,
    pub analyzer: Arc<DocumentAnalyzer>,
    pub cors_origins: Vec<String>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let ctx = settings.create_db_context();
        let llm = LlmClient::new(settings.llm.clone());

        Self {
            doc_repo: Arc::new(ctx.documents()),
            analyzer: Arc::new(DocumentAnalyzer::new(
                llm,
                settings.contract_detection,
                settings.preview_chars,
            )),
            cors_origins: settings.cors_origins.clone(),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;

    use crate::analysis::StoredAnalysis;
    use crate::models::Category;

    const BOUNDARY: &str = "docscope-test-boundary";

    async fn setup_test_app() -> (axum::Router, AppState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let settings = Settings {
            database_path: dir.path().join("test.db"),
            ..Settings::default()
        };
        settings.create_db_context().init_schema().await.unwrap();

        let state = AppState::new(&settings);
        let app = create_router(state.clone());
        (app, state, dir)
    }

    async fn seed_document(
        state: &AppState,
        filename: &str,
        category: Category,
        total: Option<&str>,
        moneda: Option<&str>,
    ) -> i32 {
        let stored = StoredAnalysis {
            emisor: Some(r#"["Ana López","Luis Pérez"]"#.to_string()),
            total: total.map(str::to_string),
            moneda: moneda.map(str::to_string),
            resumen: Some("Documento de prueba.".to_string()),
            ..StoredAnalysis::default()
        };
        state
            .doc_repo
            .save(filename, 2, "vista previa", category, &stored)
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn multipart_upload(filename: &str, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"file\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_liveness() {
        let (app, _state, _dir) = setup_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("ready"));
    }

    #[tokio::test]
    async fn test_documents_empty() {
        let (app, _state, _dir) = setup_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/documents")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total"], 0);
        assert_eq!(json["documents"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_documents_listing_newest_first() {
        let (app, state, _dir) = setup_test_app().await;
        let first = seed_document(&state, "a.pdf", Category::General, None, None).await;
        let second =
            seed_document(&state, "b.pdf", Category::FinancialDocument, None, None).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/documents")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["total"], 2);
        let docs = json["documents"].as_array().unwrap();
        assert_eq!(docs[0]["id"], second);
        assert_eq!(docs[1]["id"], first);
        assert_eq!(docs[0]["tipo_documento"], "financial_document");
    }

    #[tokio::test]
    async fn test_document_detail() {
        let (app, state, _dir) = setup_test_app().await;
        let id = seed_document(&state, "tesis.pdf", Category::AcademicWork, None, None).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/documents/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["filename"], "tesis.pdf");
        assert_eq!(json["text_preview"], "vista previa");
        assert_eq!(json["emisor"], r#"["Ana López","Luis Pérez"]"#);
    }

    #[tokio::test]
    async fn test_document_not_found_is_body_only() {
        let (app, _state, _dir) = setup_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/documents/4242")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Errors are encoded in the body, never the status code.
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Document not found");
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let (app, state, _dir) = setup_test_app().await;
        let id = seed_document(&state, "a.pdf", Category::General, None, None).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/documents/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["success"], true);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/documents/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["error"], "Document not found");
    }

    #[tokio::test]
    async fn test_delete_missing_document() {
        let (app, _state, _dir) = setup_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/documents/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Document not found");
    }

    #[tokio::test]
    async fn test_stats_skips_unparseable_and_foreign_totals() {
        let (app, state, _dir) = setup_test_app().await;
        seed_document(
            &state,
            "f1.pdf",
            Category::FinancialDocument,
            Some("1,200.50"),
            Some("MXN"),
        )
        .await;
        seed_document(
            &state,
            "f2.pdf",
            Category::FinancialDocument,
            Some("bad"),
            Some("MXN"),
        )
        .await;
        seed_document(
            &state,
            "f3.pdf",
            Category::FinancialDocument,
            Some("5"),
            Some("EUR"),
        )
        .await;
        seed_document(&state, "g.pdf", Category::General, None, None).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["total_documents"], 4);
        assert_eq!(json["by_category"]["financial_document"], 3);
        assert_eq!(json["by_category"]["general"], 1);
        assert_eq!(json["total_expenses"], 1200.50);
        assert_eq!(json["currency"], "MXN");
    }

    #[tokio::test]
    async fn test_upload_non_pdf_reports_failure_in_body() {
        let (app, _state, _dir) = setup_test_app().await;

        let response = app
            .oneshot(multipart_upload("junk.pdf", b"these are not pdf bytes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["filename"], "junk.pdf");
        assert!(json["error"].as_str().unwrap().contains("PDF"));
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let (app, _state, _dir) = setup_test_app().await;

        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; \
             name=\"other\"\r\n\r\nvalue\r\n--{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }
}
