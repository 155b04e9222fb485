//! Diesel ORM models for the documents table.

use diesel::prelude::*;

use crate::schema;

/// Document record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DocumentRecord {
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

/// New document for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::documents)]
pub struct NewDocument<'a> {
    pub filename: &'a str,
    pub pages: i32,
    pub text_preview: &'a str,
    pub tipo_documento: Option<&'a str>,
    pub fecha: Option<&'a str>,
    pub emisor: Option<&'a str>,
    pub receptor: Option<&'a str>,
    pub total: Option<&'a str>,
    pub moneda: Option<&'a str>,
    pub rfc_emisor: Option<&'a str>,
    pub conceptos: Option<&'a str>,
    pub subtotal: Option<&'a str>,
    pub iva: Option<&'a str>,
    pub resumen: Option<&'a str>,
    pub created_at: &'a str,
}
