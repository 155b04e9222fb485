//! Keyword-based document classification.
//!
//! Categories are tested in a fixed priority order: scientific vocabulary
//! first, then academic, contract, and financial. Financial keywords like
//! "total" show up in almost every document type, so that set is checked
//! last. First match wins; there is no scoring or multi-label output.

use crate::models::Category;

const SCIENTIFIC_KEYWORDS: &[&str] = &[
    "abstract",
    "methodology",
    "referencias",
    "bibliografía",
    "doi",
    "issn",
    "journal",
];

const ACADEMIC_KEYWORDS: &[&str] = &[
    "tarea",
    "ensayo",
    "trabajo",
    "universidad",
    "profesor",
    "alumno",
    "matrícula",
    "carrera",
];

const CONTRACT_KEYWORDS: &[&str] = &[
    "contrato",
    "arrendamiento",
    "cláusula",
    "partes",
    "obligaciones",
    "términos y condiciones",
    "vigencia",
    "rescisión",
];

const FINANCIAL_KEYWORDS: &[&str] = &[
    "factura",
    "ticket",
    "recibo",
    "rfc",
    "subtotal",
    "iva",
    "total",
    "comprobante",
];

/// Classify extracted text into a document category.
///
/// `contract_detection` toggles the contract branch; with it disabled,
/// contract-like documents fall through to the financial or general
/// buckets.
pub fn classify(text: &str, contract_detection: bool) -> Category {
    let lower = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if contains_any(SCIENTIFIC_KEYWORDS) {
        Category::ScientificArticle
    } else if contains_any(ACADEMIC_KEYWORDS) {
        Category::AcademicWork
    } else if contract_detection && contains_any(CONTRACT_KEYWORDS) {
        Category::Contract
    } else if contains_any(FINANCIAL_KEYWORDS) {
        Category::FinancialDocument
    } else {
        Category::General
    }
}
