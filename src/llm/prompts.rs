//! Category-specific extraction prompts.
//!
//! Each category gets its own instruction template asking the model for a
//! JSON object with a fixed key set, with explicit nulls for absent
//! fields. The document text is embedded as a truncated excerpt; the
//! prompt is the only channel of instructions to the model, so the
//! response parser has to stay defensive about what comes back.

use crate::models::Category;

const SCIENTIFIC_ARTICLE_PROMPT: &str = r#"
Analiza este artículo científico y extrae la siguiente información en formato JSON:

{
  "tipo_documento": "artículo científico",
  "titulo": "título completo del artículo",
  "autores": ["lista", "de", "autores"],
  "institucion": "institución o universidad",
  "fecha": "fecha de publicación",
  "abstract": "resumen o abstract del artículo",
  "palabras_clave": ["keywords", "del", "artículo"],
  "metodologia": "breve descripción de la metodología utilizada",
  "resultados_principales": "principales hallazgos o resultados",
  "referencias_count": "número aproximado de referencias bibliográficas",
  "revista_journal": "nombre de la revista o journal si aplica",
  "doi": "DOI si está presente",
  "resumen": "RESUMEN EJECUTIVO DETALLADO del artículo de 4-6 líneas que incluya: objetivo del estudio, metodología empleada, principales hallazgos y conclusiones"
}

Si algún campo no está presente, usa null.

DOCUMENTO:
{excerpt}
"#;

const ACADEMIC_WORK_PROMPT: &str = r#"
Analiza este trabajo académico (tarea, ensayo o proyecto) y extrae la siguiente información en formato JSON:

{
  "tipo_documento": "trabajo académico",
  "titulo": "título del trabajo",
  "autores": ["nombre", "de", "estudiantes"],
  "matriculas": ["matrículas", "si", "están"],
  "institucion": "universidad o institución educativa",
  "carrera": "carrera o programa",
  "materia": "materia o asignatura",
  "profesor": "nombre del profesor si está presente",
  "fecha": "fecha de entrega o realización",
  "tema_principal": "tema o tópico principal del trabajo",
  "objetivos": "objetivos del trabajo",
  "palabras_clave": ["conceptos", "clave"],
  "tipo_trabajo": "tipo (tarea, ensayo, proyecto, investigación, etc.)",
  "resumen": "RESUMEN EJECUTIVO DETALLADO del trabajo de 4-6 líneas que incluya: tema principal, objetivos, desarrollo y conclusiones principales"
}

Si algún campo no está presente, usa null.
Para múltiples autores o matrículas, usa arrays.

DOCUMENTO:
{excerpt}
"#;

const CONTRACT_PROMPT: &str = r#"
Analiza DETALLADAMENTE este contrato legal y extrae toda la información relevante en formato JSON.
IMPORTANTE: Sé exhaustivo y específico en tu análisis.

{
  "tipo_documento": "contrato",
  "tipo_contrato": "tipo específico (arrendamiento, compraventa, prestación de servicios, laboral, etc.)",
  "fecha": "fecha de firma o emisión del contrato",
  "vigencia_inicio": "fecha de inicio de vigencia",
  "vigencia_fin": "fecha de término o duración",
  "partes": {
    "parte_a": {
      "nombre": "nombre completo de la primera parte",
      "tipo": "rol (propietario/arrendador/empleador/prestador de servicios/etc.)",
      "identificacion": "RFC, CURP o identificación fiscal",
      "domicilio": "domicilio si está presente"
    },
    "parte_b": {
      "nombre": "nombre completo de la segunda parte",
      "tipo": "rol (inquilino/arrendatario/empleado/cliente/etc.)",
      "identificacion": "RFC, CURP o identificación fiscal",
      "domicilio": "domicilio si está presente"
    }
  },
  "objeto_contrato": "descripción DETALLADA del objeto o propósito del contrato",
  "monto": "monto principal (renta, precio, salario, etc.)",
  "moneda": "moneda",
  "periodicidad_pago": "periodicidad de pago",
  "forma_pago": "forma de pago especificada",
  "clausulas_importantes": [
    {
      "numero": "número de cláusula",
      "titulo": "título o tema de la cláusula",
      "contenido": "resumen del contenido de la cláusula"
    }
  ],
  "obligaciones_parte_a": ["lista", "DETALLADA", "de", "obligaciones"],
  "obligaciones_parte_b": ["lista", "DETALLADA", "de", "obligaciones"],
  "derechos_parte_a": ["derechos", "de", "la", "primera", "parte"],
  "derechos_parte_b": ["derechos", "de", "la", "segunda", "parte"],
  "condiciones_rescision": "condiciones ESPECÍFICAS para terminar anticipadamente",
  "penalizaciones": "penalizaciones, multas o sanciones por incumplimiento",
  "garantias": "garantías o avales requeridos",
  "jurisdiccion": "jurisdicción o fuero aplicable para controversias",
  "condiciones_especiales": ["cualquier", "condición", "especial"],
  "lugar_firma": "lugar donde se firma",
  "testigos": ["nombres", "de", "testigos"],
  "resumen": "RESUMEN EJECUTIVO DETALLADO del contrato de 4-6 líneas que incluya: propósito principal, partes involucradas, montos clave, vigencia, y obligaciones principales"
}

Si algún campo no está presente, usa null.
Sé lo más exhaustivo y detallado posible.

DOCUMENTO COMPLETO:
{excerpt}
"#;

const FINANCIAL_DOCUMENT_PROMPT: &str = r#"
Analiza este documento financiero y extrae la siguiente información en formato JSON:

{
  "tipo_documento": "tipo (factura, recibo, ticket, comprobante)",
  "fecha": "fecha del documento",
  "emisor": "nombre de la empresa o persona que emite",
  "receptor": "nombre de quien recibe (si aplica)",
  "total": "monto total (solo el número, sin símbolos)",
  "moneda": "moneda (MXN, USD, etc.)",
  "rfc_emisor": "RFC o identificación fiscal del emisor",
  "rfc_receptor": "RFC del receptor si aplica",
  "conceptos": ["lista", "de", "conceptos", "o", "items"],
  "subtotal": "subtotal si existe",
  "iva": "IVA o impuestos",
  "forma_pago": "forma de pago si está especificada",
  "folio": "número de folio o referencia",
  "resumen": "RESUMEN DETALLADO del documento de 3-4 líneas que incluya: tipo de transacción, monto total, emisor/receptor y conceptos principales"
}

Si algún campo no está presente, usa null.

DOCUMENTO:
{excerpt}
"#;

const GENERAL_PROMPT: &str = r#"
Analiza este documento y extrae la información más relevante en formato JSON:

{
  "tipo_documento": "tipo de documento detectado",
  "fecha": "fecha si existe",
  "emisor": "quien emite o crea el documento",
  "receptor": "destinatario si aplica",
  "tema_principal": "tema o propósito principal",
  "puntos_clave": ["puntos", "importantes", "del", "documento"],
  "resumen": "resumen del contenido en 2-3 líneas"
}

DOCUMENTO:
{excerpt}
"#;

/// Build the extraction prompt for a classified document.
///
/// Pure function of its inputs: the category picks the template, and the
/// document text is embedded truncated to `max_excerpt_chars`.
pub fn build_prompt(category: Category, text: &str, max_excerpt_chars: usize) -> String {
    let template = match category {
        Category::ScientificArticle => SCIENTIFIC_ARTICLE_PROMPT,
        Category::AcademicWork => ACADEMIC_WORK_PROMPT,
        Category::Contract => CONTRACT_PROMPT,
        Category::FinancialDocument => FINANCIAL_DOCUMENT_PROMPT,
        Category::General => GENERAL_PROMPT,
    };
    template.replace("{excerpt}", truncate_utf8(text, max_excerpt_chars))
}

/// Truncate text to a maximum byte length at a valid UTF-8 boundary.
pub fn truncate_utf8(text: &str, max_chars: usize) -> &str {
    if text.len() <= max_chars {
        return text;
    }
    let mut end = max_chars;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
