//! Document repository: insert, list, lookup, delete.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::models::{DocumentRecord, NewDocument};
use super::pool::{DieselError, SqlitePool};
use super::parse_datetime;
use crate::analysis::StoredAnalysis;
use crate::models::{Category, Document};
use crate::schema::documents;

/// Repository for analyzed documents.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a freshly analyzed document and return its assigned id.
    ///
    /// `created_at` is stamped here and never touched again; there is no
    /// update path for document rows.
    pub async fn save(
        &self,
        filename: &str,
        pages: u32,
        text_preview: &str,
        category: Category,
        stored: &StoredAnalysis,
    ) -> Result<i32, DieselError> {
        let created_at = Utc::now().to_rfc3339();
        let record = NewDocument {
            filename,
            pages: pages as i32,
            text_preview,
            tipo_documento: Some(category.as_str()),
            fecha: stored.fecha.as_deref(),
            emisor: stored.emisor.as_deref(),
            receptor: stored.receptor.as_deref(),
            total: stored.total.as_deref(),
            moneda: stored.moneda.as_deref(),
            rfc_emisor: stored.rfc_emisor.as_deref(),
            conceptos: stored.conceptos.as_deref(),
            subtotal: stored.subtotal.as_deref(),
            iva: stored.iva.as_deref(),
            resumen: stored.resumen.as_deref(),
            created_at: &created_at,
        };

        let mut conn = self.pool.get().await?;
        let id: i32 = diesel::insert_into(documents::table)
            .values(&record)
            .returning(documents::id)
            .get_result(&mut conn)
            .await?;
        Ok(id)
    }

    /// Get a document by id.
    pub async fn get(&self, id: i32) -> Result<Option<Document>, DieselError> {
        let mut conn = self.pool.get().await?;
        let record: Option<DocumentRecord> = documents::table
            .find(id)
            .select(DocumentRecord::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(record.map(Self::record_to_document))
    }

    /// Get all documents, newest first.
    pub async fn get_all(&self) -> Result<Vec<Document>, DieselError> {
        let mut conn = self.pool.get().await?;
        let records: Vec<DocumentRecord> = documents::table
            .select(DocumentRecord::as_select())
            .order((documents::created_at.desc(), documents::id.desc()))
            .load(&mut conn)
            .await?;
        Ok(records.into_iter().map(Self::record_to_document).collect())
    }

    /// Delete a document by id. Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DieselError> {
        let mut conn = self.pool.get().await?;
        let deleted = diesel::delete(documents::table.find(id))
            .execute(&mut conn)
            .await?;
        Ok(deleted > 0)
    }

    /// Count all documents.
    pub async fn count(&self) -> Result<u64, DieselError> {
        use diesel::dsl::count_star;
        let mut conn = self.pool.get().await?;
        let count: i64 = documents::table
            .select(count_star())
            .get_result(&mut conn)
            .await?;
        Ok(count as u64)
    }

    fn record_to_document(record: DocumentRecord) -> Document {
        Document {
            id: record.id,
            filename: record.filename,
            pages: record.pages,
            text_preview: record.text_preview,
            tipo_documento: record.tipo_documento,
            fecha: record.fecha,
            emisor: record.emisor,
            receptor: record.receptor,
            total: record.total,
            moneda: record.moneda,
            rfc_emisor: record.rfc_emisor,
            conceptos: record.conceptos,
            subtotal: record.subtotal,
            iva: record.iva,
            resumen: record.resumen,
            created_at: parse_datetime(&record.created_at),
        }
    }
}
