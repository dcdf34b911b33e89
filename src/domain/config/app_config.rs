//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Cross-origin configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<String>,
    pub cors: Option<CorsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            bind: Some("0.0.0.0".to_string()),
            port: Some(8000),
            data_dir: Some("transcriptions".to_string()),
            cors: Some(CorsConfig {
                allowed_origins: Some(vec!["*".to_string()]),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            bind: other.bind.or(self.bind),
            port: other.port.or(self.port),
            data_dir: other.data_dir.or(self.data_dir),
            cors: Self::merge_cors_config(self.cors, other.cors),
        }
    }

    /// Merge CORS config sections
    fn merge_cors_config(base: Option<CorsConfig>, other: Option<CorsConfig>) -> Option<CorsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(CorsConfig {
                allowed_origins: o.allowed_origins.or(b.allowed_origins),
            }),
        }
    }

    /// Get bind address string, or "0.0.0.0" if not set
    pub fn bind_or_default(&self) -> &str {
        self.bind.as_deref().unwrap_or("0.0.0.0")
    }

    /// Get port, or 8000 if not set
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(8000)
    }

    /// Get data directory, or "transcriptions" if not set
    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or("transcriptions")
    }

    /// Get allowed CORS origins, or the wildcard if not set
    pub fn cors_origins_or_default(&self) -> Vec<String> {
        self.cors
            .as_ref()
            .and_then(|c| c.allowed_origins.clone())
            .unwrap_or_else(|| vec!["*".to_string()])
    }
}
