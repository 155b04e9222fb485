//! Application configuration.
//!
//! Settings come from an optional TOML file with environment variable
//! overrides layered on top. The LLM API key is environment-only and is
//! never written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::llm::LlmConfig;
use crate::repository::DbContext;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// CORS origins allowed to call the API. `*` means any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Maximum characters of extracted text echoed back as a preview.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Whether the classifier tests the contract keyword set.
    #[serde(default = "default_contract_detection")]
    pub contract_detection: bool,

    /// LLM client settings.
    #[serde(default)]
    pub llm: LlmConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("docscope.db")
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_preview_chars() -> usize {
    500
}

fn default_contract_detection() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            cors_origins: default_cors_origins(),
            preview_chars: default_preview_chars(),
            contract_detection: default_contract_detection(),
            llm: LlmConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings: config file (when present), then env overrides.
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let settings = match config_path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|e| {
                    anyhow::anyhow!("could not read config file {}: {}", path.display(), e)
                })?;
                toml::from_str(&raw).map_err(|e| {
                    anyhow::anyhow!("could not parse config file {}: {}", path.display(), e)
                })?
            }
            None => {
                let default_path = Path::new("docscope.toml");
                if default_path.exists() {
                    let raw = fs::read_to_string(default_path)?;
                    toml::from_str(&raw)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(settings.with_env_overrides())
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `DOCSCOPE_DATABASE`: path to the SQLite database file
    /// - `DOCSCOPE_CORS_ORIGINS`: comma-separated allowed origins
    /// - `DOCSCOPE_PREVIEW_CHARS`: preview length
    /// - `DOCSCOPE_CONTRACT_DETECTION`: "true"/"false"
    /// - plus the `LLM_*` / `GEMINI_API_KEY` vars handled by [`LlmConfig`]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("DOCSCOPE_DATABASE") {
            self.database_path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("DOCSCOPE_CORS_ORIGINS") {
            let origins: Vec<String> = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !origins.is_empty() {
                self.cors_origins = origins;
            }
        }
        if let Ok(val) = std::env::var("DOCSCOPE_PREVIEW_CHARS") {
            if let Ok(n) = val.parse() {
                self.preview_chars = n;
            }
        }
        if let Ok(val) = std::env::var("DOCSCOPE_CONTRACT_DETECTION") {
            self.contract_detection = val.eq_ignore_ascii_case("true") || val == "1";
        }
        self.llm = self.llm.with_env_overrides();
        self
    }

    /// Create a database context for the configured database file.
    pub fn create_db_context(&self) -> DbContext {
        DbContext::new(&self.database_path)
    }
}
