//! Normalization of caller input into a chat message sequence.

use crate::error::InternalError;
use crate::llm::Message;

/// Caller-supplied conversational input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageInput {
    pub prompt: Option<String>,
    pub messages: Option<Vec<Message>>,
}

impl MessageInput {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            messages: None,
        }
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            prompt: None,
            messages: Some(messages),
        }
    }
}

/// Turn `input` into the message sequence sent to a model.
///
/// A non-empty `messages` list is returned as is and `prompt` is ignored.
/// Otherwise a non-empty `prompt` becomes a single user message. Empty
/// values count as missing.
pub fn get_messages(input: &MessageInput) -> Result<Vec<Message>, InternalError> {
    if let Some(messages) = input.messages.as_ref().filter(|m| !m.is_empty()) {
        return Ok(messages.clone());
    }

    if let Some(prompt) = input.prompt.as_deref().filter(|p| !p.is_empty()) {
        return Ok(vec![Message::user(prompt)]);
    }

    Err(InternalError::new(
        "either prompt or messages must be provided and non-empty",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    fn conversation() -> Vec<Message> {
        vec![Message::user("Hello"), Message::assistant("Hi there!")]
    }

    #[test]
    fn test_no_input_is_error() {
        let err = get_messages(&MessageInput::default()).unwrap_err();
        assert!(err.message().contains("prompt or messages"));
    }

    #[test]
    fn test_empty_messages_is_error() {
        assert!(get_messages(&MessageInput::from_messages(Vec::new())).is_err());
    }

    #[test]
    fn test_empty_prompt_is_error() {
        assert!(get_messages(&MessageInput::from_prompt("")).is_err());
    }

    #[test]
    fn test_empty_prompt_and_empty_messages_is_error() {
        let input = MessageInput {
            prompt: Some(String::new()),
            messages: Some(Vec::new()),
        };
        assert!(get_messages(&input).is_err());
    }

    #[test]
    fn test_prompt_becomes_user_message() {
        let result = get_messages(&MessageInput::from_prompt("Hello")).unwrap();
        assert_eq!(result, vec![Message::user("Hello")]);
        assert_eq!(result[0].role, Role::User);
    }

    #[test]
    fn test_messages_returned_in_order() {
        let input = MessageInput {
            prompt: None,
            messages: Some(conversation()),
        };
        let result = get_messages(&input).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result, conversation());
    }

    #[test]
    fn test_messages_take_precedence_over_prompt() {
        let input = MessageInput {
            prompt: Some("ignored".to_string()),
            messages: Some(vec![Message::user("kept")]),
        };
        assert_eq!(get_messages(&input).unwrap(), vec![Message::user("kept")]);
    }

    #[test]
    fn test_prompt_used_when_messages_empty() {
        let input = MessageInput {
            prompt: Some("fallback".to_string()),
            messages: Some(Vec::new()),
        };
        assert_eq!(get_messages(&input).unwrap(), vec![Message::user("fallback")]);
    }

    #[test]
    fn test_repeated_calls_are_equal() {
        let input = MessageInput::from_messages(conversation());
        assert_eq!(get_messages(&input).unwrap(), get_messages(&input).unwrap());

        let empty = MessageInput::default();
        assert_eq!(get_messages(&empty), get_messages(&empty));
    }
}
