//! llm-providers - Uniform provider adapters for hosted chat-completion APIs.

pub mod config;
pub mod error;
pub mod llm;
pub mod messages;

pub use error::{InitializationError, InternalError};
pub use messages::{MessageInput, get_messages};
