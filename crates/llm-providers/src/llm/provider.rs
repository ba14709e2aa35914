//! Provider base abstraction shared by every backend.

use tracing::debug;

use super::openai::ChatClient;
use crate::error::InitializationError;

/// Model identifier. Any non-empty string is accepted; providers publish a
/// list of known ids for discovery only.
pub type ModelId = String;

/// Static capabilities of one provider backend.
pub trait ProviderKind {
    /// Settings accepted by the backend's client factory.
    type Settings;
    /// Client handle built from the settings.
    type Client: ChatClient;

    /// Human-readable provider name.
    const NAME: &'static str;

    /// Build the client handle. Must not perform network I/O.
    fn create_client(settings: &Self::Settings) -> Result<Self::Client, InitializationError>;

    /// Model used when the caller does not pick one.
    fn default_language_model_id() -> ModelId;

    /// Model ids the backend is known to serve.
    fn known_model_ids() -> &'static [&'static str] {
        &[]
    }
}

/// A configured provider: the settings it was built with plus its client.
pub struct Provider<K: ProviderKind> {
    options: K::Settings,
    client: K::Client,
}

impl<K: ProviderKind> Provider<K> {
    /// Store `options` verbatim and build the client from them.
    ///
    /// Errors from the client factory are returned unchanged.
    pub fn new(options: K::Settings) -> Result<Self, InitializationError> {
        let client = K::create_client(&options)?;
        debug!(provider = K::NAME, "Created provider client");
        Ok(Self { options, client })
    }

    pub fn options(&self) -> &K::Settings {
        &self.options
    }

    pub fn client(&self) -> &K::Client {
        &self.client
    }

    pub fn default_language_model_id(&self) -> ModelId {
        K::default_language_model_id()
    }

    pub fn known_model_ids(&self) -> &'static [&'static str] {
        K::known_model_ids()
    }

    /// Whether `model` is in the provider's known list. Informational only.
    pub fn is_known_model(&self, model: &str) -> bool {
        K::known_model_ids().contains(&model)
    }
}

impl<K> std::fmt::Debug for Provider<K>
where
    K: ProviderKind,
    K::Settings: std::fmt::Debug,
    K::Client: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("name", &K::NAME)
            .field("options", &self.options)
            .field("client", &self.client)
            .finish()
    }
}

/// Object-safe view of a provider, used to pick a backend at runtime.
pub trait LanguageModelProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn default_language_model_id(&self) -> ModelId;

    fn chat_client(&self) -> &dyn ChatClient;

    /// The caller's model if given and non-empty, otherwise the default.
    fn resolve_model(&self, requested: Option<&str>) -> ModelId {
        match requested {
            Some(model) if !model.is_empty() => model.to_string(),
            _ => self.default_language_model_id(),
        }
    }
}

impl<K> LanguageModelProvider for Provider<K>
where
    K: ProviderKind,
    K::Settings: Send + Sync,
{
    fn name(&self) -> &'static str {
        K::NAME
    }

    fn default_language_model_id(&self) -> ModelId {
        K::default_language_model_id()
    }

    fn chat_client(&self) -> &dyn ChatClient {
        &self.client
    }
}
