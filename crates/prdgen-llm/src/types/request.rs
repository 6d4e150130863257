use serde::{Deserialize, Serialize};

use super::message::{Message, Role};

/// Body of a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages; a system message, if any, comes first
    pub messages: Vec<Message>,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Always false: responses are read in one piece
    #[serde(default)]
    pub stream: bool,
}

impl CompletionRequest {
    /// Assemble a single-turn request: optional system message, then the user prompt
    pub fn single_turn(
        model: impl Into<String>,
        system_prompt: Option<&str>,
        prompt: &str,
        temperature: f64,
        max_tokens: Option<u32>,
    ) -> Self {
        let messages = system_prompt
            .map(Message::system)
            .into_iter()
            .chain(std::iter::once(Message::user(prompt)))
            .collect();

        Self {
            model: model.into(),
            messages,
            temperature,
            max_tokens,
            stream: false,
        }
    }

    /// First shape rule the request breaks, if any
    ///
    /// A well-formed request is non-empty, with any system message only at
    /// position 0.
    pub fn shape_problem(&self) -> Option<&'static str> {
        if self.messages.is_empty() {
            Some("request has no messages")
        } else if self.messages.iter().skip(1).any(|m| m.role == Role::System) {
            Some("system message must come first")
        } else {
            None
        }
    }
}
