//! Database context: owns the connection pool and creates the schema.

use std::path::Path;

use diesel_async::SimpleAsyncConnection;

use super::document::DocumentRepository;
use super::pool::{DieselError, SqlitePool};

/// Entry point for database access. Create one per command or service,
/// then hand out repositories from it.
#[derive(Clone)]
pub struct DbContext {
    pool: SqlitePool,
}

impl DbContext {
    /// Create a context from a SQLite file path.
    pub fn new(db_path: &Path) -> Self {
        Self {
            pool: SqlitePool::from_path(db_path),
        }
    }

    /// Get a document repository.
    pub fn documents(&self) -> DocumentRepository {
        DocumentRepository::new(self.pool.clone())
    }

    /// Initialize the database schema.
    ///
    /// Idempotent; safe to run on every startup.
    pub async fn init_schema(&self) -> Result<(), DieselError> {
        let mut conn = self.pool.get().await?;
        conn.batch_execute(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                filename TEXT NOT NULL,
                pages INTEGER NOT NULL,
                text_preview TEXT NOT NULL DEFAULT '',
                tipo_documento TEXT,
                fecha TEXT,
                emisor TEXT,
                receptor TEXT,
                total TEXT,
                moneda TEXT,
                rfc_emisor TEXT,
                conceptos TEXT,
                subtotal TEXT,
                iva TEXT,
                resumen TEXT,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_documents_created_at
                ON documents(created_at);
            "#,
        )
        .await?;
        Ok(())
    }
}
