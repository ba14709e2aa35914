//! Provider adapters and the client handles they build.

mod error;
mod openai;
mod provider;
mod qwen;
mod registry;
mod types;

pub use error::LLMError;
pub use openai::{ChatClient, OpenAICompatibleClient};
pub use provider::{LanguageModelProvider, ModelId, Provider, ProviderKind};
pub use qwen::{QWEN_CHAT_MODEL_IDS, Qwen, QwenKind, QwenProviderSettings, create_qwen};
pub use registry::{ProviderId, ProviderRegistry};
pub use types::{ChatRequest, ChatResponse, Choice, Content, ContentPart, ImageUrl, Message, Role, Usage};
