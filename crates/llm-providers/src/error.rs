//! Crate error types.

use thiserror::Error;

/// The caller violated an input contract of this library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    message: String,
}

impl InternalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while building a provider's underlying client.
#[derive(Debug, Error)]
pub enum InitializationError {
    /// No API key in the settings or the environment.
    #[error("missing api key: set `api_key` or the {env_var} environment variable")]
    MissingApiKey { env_var: &'static str },

    /// Base URL could not be parsed.
    #[error("invalid base url `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured header name or value is not valid HTTP.
    #[error("invalid header `{name}`")]
    InvalidHeader { name: String },

    /// HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
