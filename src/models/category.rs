//! Document categories produced by keyword classification.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// The closed set of document categories the pipeline recognizes.
///
/// A document is classified exactly once, before prompt construction;
/// the category decides which extraction prompt is sent to the model
/// and which fields are projected into the stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ScientificArticle,
    AcademicWork,
    Contract,
    FinancialDocument,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScientificArticle => "scientific_article",
            Self::AcademicWork => "academic_work",
            Self::Contract => "contract",
            Self::FinancialDocument => "financial_document",
            Self::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "scientific_article" => Some(Self::ScientificArticle),
            "academic_work" => Some(Self::AcademicWork),
            "contract" => Some(Self::Contract),
            "financial_document" => Some(Self::FinancialDocument),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
