use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::{AppError, Result};
use crate::domain::options::ConvertOptions;

/// Runtime configuration, loaded once at startup.
///
/// Precedence: defaults < `conversor.toml` < `CONVERSOR_*` env vars < bare
/// `PORT` (kept for parity with the legacy deployment).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    /// Scratch directory for uploads and generated workbooks.
    pub upload_dir: PathBuf,

    pub pipeline: ConvertOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            upload_dir: PathBuf::from("uploads"),
            pipeline: ConvertOptions::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("conversor.toml"))
            .merge(Env::prefixed("CONVERSOR_").split("__"))
            .merge(Env::raw().only(&["port"]))
            .extract()
            .map_err(|e| AppError::IoError(format!("Failed to load configuration: {}", e)))
    }
}
