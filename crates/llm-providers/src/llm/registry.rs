//! Provider registry for managing provider instances.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::provider::LanguageModelProvider;
use super::qwen::{self, Qwen, QwenProviderSettings};
use crate::config::Config;
use crate::error::InitializationError;

/// Supported provider backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Qwen,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Qwen => "qwen",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "qwen" => Ok(ProviderId::Qwen),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Registry of providers, keyed by provider id.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, Arc<dyn LanguageModelProvider>>,
    qwen: Option<Arc<Qwen>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every provider listed in the config.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let mut registry = Self::new();

        if let Some(settings) = &config.providers.qwen {
            registry.register_qwen(Qwen::new(settings.clone())?);
        }

        if registry.is_empty() {
            warn!("No providers configured");
        }

        Ok(registry)
    }

    /// Initialize providers from environment variables.
    pub fn from_env() -> Result<Self, InitializationError> {
        Self::from_api_keys(std::env::var(qwen::API_KEY_ENV).ok())
    }

    fn from_api_keys(qwen_key: Option<String>) -> Result<Self, InitializationError> {
        let mut registry = Self::new();

        if let Some(key) = qwen_key.filter(|k| !k.is_empty()) {
            registry.register_qwen(Qwen::new(QwenProviderSettings::with_api_key(key))?);
        }

        if registry.is_empty() {
            warn!("No LLM providers configured. Set {}.", qwen::API_KEY_ENV);
        }

        Ok(registry)
    }

    /// Register a Qwen provider, keeping typed access to it.
    pub fn register_qwen(&mut self, provider: Qwen) {
        let provider = Arc::new(provider);
        self.register(ProviderId::Qwen, provider.clone());
        self.qwen = Some(provider);
        info!("Registered Qwen provider");
    }

    /// The Qwen provider, if registered.
    pub fn qwen(&self) -> Option<Arc<Qwen>> {
        self.qwen.clone()
    }

    /// Register a provider implementation.
    ///
    /// Replacing an id also drops any typed handle held for it.
    pub fn register(&mut self, id: ProviderId, provider: Arc<dyn LanguageModelProvider>) {
        match id {
            ProviderId::Qwen => self.qwen = None,
        }
        self.providers.insert(id, provider);
    }

    /// Get a provider by id.
    pub fn get(&self, id: ProviderId) -> Option<Arc<dyn LanguageModelProvider>> {
        self.providers.get(&id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
