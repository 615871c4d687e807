//! Verdant configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main Verdant configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerdantConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Text generation service configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl VerdantConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config: {}", e)))
    }

    /// Load from an explicit path, falling back to the default location and
    /// then to built-in defaults when no file exists there.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let default_path = Self::default_path();
        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "Loading default config file");
            return Self::from_file(&default_path);
        }
        Ok(Self::default())
    }

    /// Default config file location (~/.verdant/config.toml)
    pub fn default_path() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".verdant")
            .join("config.toml")
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins (empty = any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }
}

/// Generative Language API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model name
    pub model: String,

    /// API base URL
    pub base_url: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Upper bound for a single generation call, in seconds
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GeneratorConfig {
    /// Resolve the API key from the configured environment variable
    pub fn resolve_api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::Config(format!(
                "API key not set: environment variable {} is missing or empty",
                self.api_key_env
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = VerdantConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.generator.model, "gemini-pro");
        assert_eq!(config.generator.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.generator.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = VerdantConfig::from_toml(
            r#"
            [server]
            port = 8080

            [generator]
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.generator.timeout_secs, 5);
        assert_eq!(config.generator.model, "gemini-pro");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = VerdantConfig::from_toml("").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = VerdantConfig::from_toml("[server]\nport = \"nope\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nmodel = \"gemini-1.5-flash\"").unwrap();
        let config = VerdantConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.generator.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = VerdantConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = VerdantConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = VerdantConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.generator.base_url, config.generator.base_url);
    }

    #[test]
    fn test_resolve_api_key_missing() {
        let config = GeneratorConfig {
            api_key_env: "VERDANT_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        let err = config.resolve_api_key().unwrap_err();
        assert!(err.to_string().contains("VERDANT_TEST_KEY_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn test_resolve_api_key_present() {
        std::env::set_var("VERDANT_TEST_KEY_PRESENT", "secret-123");
        let config = GeneratorConfig {
            api_key_env: "VERDANT_TEST_KEY_PRESENT".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().unwrap(), "secret-123");
    }

    #[test]
    fn test_resolve_api_key_blank_is_missing() {
        std::env::set_var("VERDANT_TEST_KEY_BLANK", "   ");
        let config = GeneratorConfig {
            api_key_env: "VERDANT_TEST_KEY_BLANK".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_err());
    }
}
