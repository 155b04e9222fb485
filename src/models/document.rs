//! Stored document model.
//!
//! A row is created once per successful upload-and-analyze request and is
//! never updated in place; it only goes away through an explicit delete.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analyzed document as persisted in the database.
///
/// `emisor` and `conceptos` hold either a plain string or a JSON-encoded
/// array of strings, depending on what the model returned for the
/// document's category. Use [`Document::emisor_list`] and
/// [`Document::conceptos_list`] to recover the ordered sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Database row ID, assigned on insert.
    pub id: i32,
    /// Original upload filename.
    pub filename: String,
    /// Page count reported by the PDF extractor.
    pub pages: i32,
    /// Leading slice of the extracted text.
    pub text_preview: String,
    /// Detected category tag, one of the five fixed values.
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
    /// Set once at insert, never modified afterwards.
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Decode `emisor` as an ordered list of strings, if it was stored as one.
    pub fn emisor_list(&self) -> Option<Vec<String>> {
        self.emisor
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
    }

    /// Decode `conceptos` as an ordered list of strings, if it was stored as one.
    pub fn conceptos_list(&self) -> Option<Vec<String>> {
        self.conceptos
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_document() -> Document {
        Document {
            id: 1,
            filename: "factura.pdf".to_string(),
            pages: 1,
            text_preview: String::new(),
            tipo_documento: None,
            fecha: None,
            emisor: None,
            receptor: None,
            total: None,
            moneda: None,
            rfc_emisor: None,
            conceptos: None,
            subtotal: None,
            iva: None,
            resumen: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_list_fields_decode() {
        let mut doc = blank_document();
        doc.emisor = Some(r#"["Ana López","Luis Pérez"]"#.to_string());
        doc.conceptos = Some(r#"["renta","luz"]"#.to_string());

        assert_eq!(
            doc.emisor_list(),
            Some(vec!["Ana López".to_string(), "Luis Pérez".to_string()])
        );
        assert_eq!(
            doc.conceptos_list(),
            Some(vec!["renta".to_string(), "luz".to_string()])
        );
    }

    #[test]
    fn test_plain_string_is_not_a_list() {
        let mut doc = blank_document();
        doc.emisor = Some("Comercial del Norte SA".to_string());
        assert_eq!(doc.emisor_list(), None);
    }
}
