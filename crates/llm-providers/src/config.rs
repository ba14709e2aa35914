use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::llm::{ProviderId, QwenProviderSettings};

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_provider")]
    pub default_provider: ProviderId,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(serde_saphyr::from_str(&contents)?)
    }
}

fn default_provider() -> ProviderId {
    ProviderId::Qwen
}

// ============================================================================
// ProvidersConfig
// ============================================================================

/// Per-provider settings, passed unchanged to each provider's client factory.
#[derive(Debug, Default, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub qwen: Option<QwenProviderSettings>,
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_saphyr::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_provider, ProviderId::Qwen);
        assert!(config.providers.qwen.is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let tmp_dir = TempDir::new().unwrap();
        let missing_path = tmp_dir.path().join("missing-config.yaml");
        let config = Config::load(&missing_path).await.unwrap();
        assert_eq!(config.default_provider, ProviderId::Qwen);
        assert!(config.providers.qwen.is_none());
    }

    #[tokio::test]
    async fn test_load_valid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
default_provider: qwen
providers:
  qwen:
    api_key: "test-api-key"
    base_url: "https://dashscope.aliyuncs.com/compatible-mode/v1"
    headers:
      x-dashscope-workspace: "ws-1"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).await.unwrap();
        let qwen = config.providers.qwen.unwrap();
        assert_eq!(qwen.api_key.as_deref(), Some("test-api-key"));
        assert_eq!(
            qwen.base_url.as_deref(),
            Some("https://dashscope.aliyuncs.com/compatible-mode/v1")
        );
        assert_eq!(qwen.headers["x-dashscope-workspace"], "ws-1");
        assert!(qwen.query_params.is_empty());
    }

    #[tokio::test]
    async fn test_load_partial_yaml_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
providers:
  qwen:
    api_key: "k"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).await.unwrap();
        assert_eq!(config.default_provider, ProviderId::Qwen); // default
        assert!(config.providers.qwen.unwrap().base_url.is_none());
    }

    #[tokio::test]
    async fn test_load_unknown_provider_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_provider: gemini").unwrap();

        let result = Config::load(file.path()).await;
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(file.path()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_config_error_display() {
        let io_error = ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "test",
        ));
        assert!(io_error.to_string().contains("failed to read config file"));
    }
}
