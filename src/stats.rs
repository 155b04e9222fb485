//! Aggregate statistics over stored documents.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Document;

/// Currencies included in the expense total. Rows in any other currency
/// are left out of the sum entirely.
const SUMMED_CURRENCIES: &[&str] = &["MXN", "USD", "$"];

/// Label reported for the expense total. Kept as a fixed constant even
/// when several currencies were summed; see DESIGN.md.
const REPORTED_CURRENCY: &str = "MXN";

/// Aggregate statistics for the stored document set.
#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_documents: u64,
    /// Count per detected category. Only categories actually present
    /// appear; nothing is zero-filled.
    pub by_category: HashMap<String, u64>,
    pub total_expenses: f64,
    pub currency: &'static str,
}

/// Compute statistics from all stored rows.
///
/// The expense total is best-effort: a row contributes only when its
/// `total` parses as a number (thousands-separator commas stripped) and
/// its currency is on the allow-list; everything else is skipped
/// silently rather than reported as an error.
pub fn aggregate(documents: &[Document]) -> Stats {
    let mut by_category: HashMap<String, u64> = HashMap::new();
    let mut total_expenses = 0.0_f64;

    for doc in documents {
        if let Some(category) = &doc.tipo_documento {
            *by_category.entry(category.clone()).or_insert(0) += 1;
        }

        let allowed = doc
            .moneda
            .as_deref()
            .is_some_and(|m| SUMMED_CURRENCIES.contains(&m));
        if allowed {
            if let Some(amount) = doc
                .total
                .as_deref()
                .and_then(|t| t.replace(',', "").trim().parse::<f64>().ok())
            {
                total_expenses += amount;
            }
        }
    }

    Stats {
        total_documents: documents.len() as u64,
        by_category,
        total_expenses: (total_expenses * 100.0).round() / 100.0,
        currency: REPORTED_CURRENCY,
    }
}
