//! Qwen provider (Alibaba Cloud DashScope, OpenAI-compatible mode).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::openai::OpenAICompatibleClient;
use super::provider::{ModelId, Provider, ProviderKind};
use crate::error::InitializationError;

pub const DEFAULT_BASE_URL: &str = "https://dashscope-intl.aliyuncs.com/compatible-mode/v1";
pub const API_KEY_ENV: &str = "DASHSCOPE_API_KEY";

/// Chat models served by DashScope. Other ids are still accepted.
pub const QWEN_CHAT_MODEL_IDS: &[&str] = &[
    "qwen2.5-14b-instruct-1m",
    "qwen2.5-72b-instruct",
    "qwen2.5-32b-instruct",
    "qwen2.5-14b-instruct",
    "qwen2.5-7b-instruct",
    "qwen2-57b-a14b-instruct",
    "qwen2.5-7b-instruct-1m",
    "qwen-max",
    "qwen-max-latest",
    "qwen-max-2025-01-25",
    "qwen-plus",
    "qwen-plus-latest",
    "qwen-plus-2025-01-25",
    "qwen-turbo",
    "qwen-turbo-latest",
    "qwen-turbo-2024-11-01",
    "qwen-vl-max",
    "qwen-vl-plus",
    "qwen2.5-vl-72b-instruct",
    "qwen2.5-vl-7b-instruct",
    "qwen2.5-vl-3b-instruct",
];

/// Settings for the Qwen client factory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QwenProviderSettings {
    /// API base URL. Defaults to the international DashScope endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// API key. Falls back to `DASHSCOPE_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Extra headers sent with every request.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Extra query parameters appended to every request URL.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query_params: BTreeMap<String, String>,
}

impl QwenProviderSettings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

/// Build an OpenAI-compatible client for DashScope from `settings`.
pub fn create_qwen(
    settings: &QwenProviderSettings,
) -> Result<OpenAICompatibleClient, InitializationError> {
    let api_key = resolve_api_key(settings.api_key.as_deref(), std::env::var(API_KEY_ENV).ok())?;
    let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
    OpenAICompatibleClient::new(
        base_url,
        api_key,
        &settings.headers,
        &settings.query_params,
    )
}

fn resolve_api_key(
    configured: Option<&str>,
    from_env: Option<String>,
) -> Result<String, InitializationError> {
    configured
        .map(str::to_string)
        .or(from_env)
        .filter(|key| !key.is_empty())
        .ok_or(InitializationError::MissingApiKey {
            env_var: API_KEY_ENV,
        })
}

/// Marker for the Qwen backend.
#[derive(Debug, Clone, Copy)]
pub struct QwenKind;

impl ProviderKind for QwenKind {
    type Settings = QwenProviderSettings;
    type Client = OpenAICompatibleClient;

    const NAME: &'static str = "qwen";

    fn create_client(settings: &QwenProviderSettings) -> Result<Self::Client, InitializationError> {
        create_qwen(settings)
    }

    fn default_language_model_id() -> ModelId {
        "qwen-max".to_string()
    }

    fn known_model_ids() -> &'static [&'static str] {
        QWEN_CHAT_MODEL_IDS
    }
}

pub type Qwen = Provider<QwenKind>;
