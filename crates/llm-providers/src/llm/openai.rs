//! OpenAI-compatible chat completion client.
//!
//! This is the client handle a provider builds from its settings. Construction
//! only validates and captures configuration; no request is sent until `chat`.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use super::error::LLMError;
use super::types::{ChatRequest, ChatResponse};
use crate::error::InitializationError;

/// Inference operations exposed by a client handle.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Make a chat completion request.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError>;
}

/// Client for any API implementing the OpenAI chat completions format.
#[derive(Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    base_url: String,
    api_key: String,
    query_params: Vec<(String, String)>,
}

impl OpenAICompatibleClient {
    pub fn new(
        base_url: &str,
        api_key: String,
        headers: &BTreeMap<String, String>,
        query_params: &BTreeMap<String, String>,
    ) -> Result<Self, InitializationError> {
        Url::parse(base_url).map_err(|source| InitializationError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        let client = Client::builder()
            .default_headers(header_map(headers)?)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            query_params: query_params
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for OpenAICompatibleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAICompatibleClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("query_params", &self.query_params)
            .finish()
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, InitializationError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = || InitializationError::InvalidHeader { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[async_trait]
impl ChatClient for OpenAICompatibleClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut req = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key));

        if !self.query_params.is_empty() {
            req = req.query(&self.query_params);
        }

        let response = req.json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}
