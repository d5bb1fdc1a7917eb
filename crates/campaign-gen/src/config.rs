//! Typed YAML configuration.
//!
//! Everything here is validated eagerly at load time so a bad endpoint URL or
//! HTTP method is fatal at startup instead of surfacing mid-batch.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;
use url::Url;

use crate::delivery::DeliveryEndpoint;
use crate::error::{GenError, GenResult};
use crate::ollama::OllamaConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Local seeded pseudo-random generation.
    Random,
    /// Structured generation through the Ollama service.
    Ollama,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub ollama: OllamaSection,
    pub csv: CsvConfig,
    #[serde(default)]
    pub generation: GenerationSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub endpoint_url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OllamaSection {
    pub host: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_seconds: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CsvConfig {
    pub sales_file: PathBuf,
    pub campaign_product_file: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationSection {
    pub mode: GenerationMode,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: String,
}

fn default_method() -> String {
    "POST".to_string()
}

fn default_api_timeout() -> u64 {
    30
}

impl Default for OllamaSection {
    fn default() -> Self {
        let base = OllamaConfig::default();
        Self {
            host: base.host,
            model: base.model,
            temperature: base.temperature,
            timeout_seconds: base.timeout.as_secs(),
        }
    }
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Random,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn endpoint(&self) -> GenResult<DeliveryEndpoint> {
        let url = Url::parse(&self.endpoint_url).map_err(|e| {
            GenError::InvalidArgument(format!("invalid endpoint_url '{}': {e}", self.endpoint_url))
        })?;
        let method = reqwest::Method::from_bytes(self.method.as_bytes()).map_err(|_| {
            GenError::InvalidArgument(format!("invalid HTTP method '{}'", self.method))
        })?;
        Ok(DeliveryEndpoint {
            url,
            method,
            timeout: Duration::from_secs(self.timeout_seconds),
        })
    }
}

impl OllamaSection {
    pub fn client_config(&self) -> OllamaConfig {
        OllamaConfig {
            host: self.host.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

impl AppConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> GenResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            GenError::InvalidArgument(format!("cannot read config file '{}': {e}", path.display()))
        })?;
        let config: AppConfig = serde_yaml::from_slice(&bytes)?;
        // Surface endpoint problems now rather than after generation.
        config.api.endpoint()?;
        Ok(config)
    }
}
