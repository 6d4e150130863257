use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// A successful chat completion body
///
/// Decoding doubles as shape validation: a body missing any of these
/// fields, or holding the wrong types, fails to deserialize. Extra fields
/// such as `object` or `usage` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Unique response identifier
    pub id: String,
    /// Model used for generation
    pub model: String,
    /// Unix timestamp of creation; any JSON number, integer or float
    pub created: Number,
    /// Generated choices
    pub choices: Vec<Choice>,
}

/// A single completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice; any JSON number
    pub index: Number,
    /// Generated message
    pub message: ChoiceMessage,
    /// Why generation stopped; the field must be present but may be null
    #[serde(deserialize_with = "present_but_nullable")]
    pub finish_reason: Option<String>,
}

/// Message content within a response choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Role is always assistant for completions
    pub role: String,
    /// Text content
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice, if present and non-empty
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

// Plain `Option` fields treat a missing key as `None`
fn present_but_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
