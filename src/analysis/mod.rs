//! Projection of a parsed analysis onto the stored row shape.
//!
//! Each category's prompt asks for a different key set, but the database
//! row has one fixed shape. The merge below reads each stored column from
//! an explicit, per-category chain of source keys, first present key
//! wins. Fields the model omitted (or returned as JSON null) stay `None`.

use serde_json::Value;

use crate::models::Category;

/// The flattened subset of an analysis that gets persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredAnalysis {
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
}

impl StoredAnalysis {
    /// Project a parsed analysis object onto the stored columns.
    ///
    /// Source keys per category:
    /// - scientific/academic: emisor from autores, receptor from
    ///   institucion, conceptos from palabras_clave, resumen falling back
    ///   to abstract
    /// - contract: emisor/rfc_emisor from partes.parte_a, receptor from
    ///   partes.parte_b, total from monto, conceptos from
    ///   condiciones_especiales
    /// - financial: direct column names
    /// - general: direct column names, conceptos from puntos_clave
    pub fn from_value(category: Category, analysis: &Value) -> Self {
        let fecha = text_field(analysis, "fecha");
        let resumen = text_field(analysis, "resumen");

        match category {
            Category::ScientificArticle | Category::AcademicWork => Self {
                fecha,
                emisor: list_or_text_field(analysis, "autores"),
                receptor: text_field(analysis, "institucion"),
                conceptos: list_or_text_field(analysis, "palabras_clave"),
                resumen: resumen.or_else(|| text_field(analysis, "abstract")),
                ..Self::default()
            },
            Category::Contract => Self {
                fecha,
                emisor: text_at(analysis, &["partes", "parte_a", "nombre"]),
                receptor: text_at(analysis, &["partes", "parte_b", "nombre"]),
                total: text_field(analysis, "monto"),
                moneda: text_field(analysis, "moneda"),
                rfc_emisor: text_at(analysis, &["partes", "parte_a", "identificacion"]),
                conceptos: list_or_text_field(analysis, "condiciones_especiales"),
                resumen,
                ..Self::default()
            },
            Category::FinancialDocument => Self {
                fecha,
                emisor: list_or_text_field(analysis, "emisor"),
                receptor: text_field(analysis, "receptor"),
                total: text_field(analysis, "total"),
                moneda: text_field(analysis, "moneda"),
                rfc_emisor: text_field(analysis, "rfc_emisor"),
                conceptos: list_or_text_field(analysis, "conceptos"),
                subtotal: text_field(analysis, "subtotal"),
                iva: text_field(analysis, "iva"),
                resumen,
            },
            Category::General => Self {
                fecha,
                emisor: list_or_text_field(analysis, "emisor"),
                receptor: text_field(analysis, "receptor"),
                conceptos: list_or_text_field(analysis, "puntos_clave"),
                resumen,
                ..Self::default()
            },
        }
    }
}

/// Read a top-level field as text. Numbers are stringified; null and
/// missing both read as `None`.
fn text_field(value: &Value, key: &str) -> Option<String> {
    as_text(value.get(key)?)
}

/// Read a field at a nested path as text.
fn text_at(value: &Value, path: &[&str]) -> Option<String> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    as_text(current)
}

/// Read a field that may be a list of strings or a plain string.
/// Lists are stored JSON-encoded so the order survives the round trip.
fn list_or_text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Array(items) => {
            let strings: Vec<String> = items.iter().filter_map(as_text).collect();
            if strings.is_empty() {
                None
            } else {
                serde_json::to_string(&strings).ok()
            }
        }
        other => as_text(other),
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_financial_projection() {
        let analysis = json!({
            "tipo_documento": "factura",
            "fecha": "2024-03-11",
            "emisor": "Comercial del Norte SA",
            "receptor": "Juan Escutia",
            "total": "1,200.50",
            "moneda": "MXN",
            "rfc_emisor": "CDN090101XX1",
            "conceptos": ["renta de equipo", "flete"],
            "subtotal": "1,035.00",
            "iva": "165.50",
            "resumen": "Factura por renta de equipo."
        });

        let stored = StoredAnalysis::from_value(Category::FinancialDocument, &analysis);
        assert_eq!(stored.total.as_deref(), Some("1,200.50"));
        assert_eq!(stored.moneda.as_deref(), Some("MXN"));
        assert_eq!(
            stored.conceptos.as_deref(),
            Some(r#"["renta de equipo","flete"]"#)
        );
        assert_eq!(stored.iva.as_deref(), Some("165.50"));
    }

    #[test]
    fn test_scientific_projection_maps_authors_and_abstract() {
        let analysis = json!({
            "titulo": "Sobre hongos",
            "autores": ["Ana López", "Luis Pérez"],
            "institucion": "UNAM",
            "abstract": "Estudiamos hongos.",
            "palabras_clave": ["hongos", "micología"],
            "resumen": null
        });

        let stored = StoredAnalysis::from_value(Category::ScientificArticle, &analysis);
        assert_eq!(stored.emisor.as_deref(), Some(r#"["Ana López","Luis Pérez"]"#));
        assert_eq!(stored.receptor.as_deref(), Some("UNAM"));
        // resumen is null, so the abstract fills in.
        assert_eq!(stored.resumen.as_deref(), Some("Estudiamos hongos."));
        assert_eq!(stored.total, None);
    }

    #[test]
    fn test_contract_projection_reads_nested_parties() {
        let analysis = json!({
            "fecha": "2024-01-15",
            "partes": {
                "parte_a": {"nombre": "Inmobiliaria Sur", "identificacion": "ISU0101017A8"},
                "parte_b": {"nombre": "María Torres"}
            },
            "monto": "12,000",
            "moneda": "MXN",
            "resumen": "Arrendamiento de local."
        });

        let stored = StoredAnalysis::from_value(Category::Contract, &analysis);
        assert_eq!(stored.emisor.as_deref(), Some("Inmobiliaria Sur"));
        assert_eq!(stored.receptor.as_deref(), Some("María Torres"));
        assert_eq!(stored.total.as_deref(), Some("12,000"));
        assert_eq!(stored.rfc_emisor.as_deref(), Some("ISU0101017A8"));
    }

    #[test]
    fn test_absent_and_null_fields_stay_none() {
        let analysis = json!({"fecha": null});
        let stored = StoredAnalysis::from_value(Category::General, &analysis);
        assert_eq!(stored, StoredAnalysis::default());
    }

    #[test]
    fn test_numeric_total_is_stringified() {
        let analysis = json!({"total": 850.25, "moneda": "USD"});
        let stored = StoredAnalysis::from_value(Category::FinancialDocument, &analysis);
        assert_eq!(stored.total.as_deref(), Some("850.25"));
    }
}
