use async_trait::async_trait;

use crate::error::CompletionError;

/// Per-call overrides for text generation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// System instruction placed before the user prompt
    pub system_prompt: Option<String>,
    /// Sampling temperature; the client default applies when unset
    pub temperature: Option<f64>,
    /// Maximum tokens to generate; the client default applies when unset
    pub max_tokens: Option<u32>,
}

impl GenerateOptions {
    /// Options carrying only a system instruction
    pub fn with_system_prompt(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: Some(system_prompt.into()),
            ..Self::default()
        }
    }
}

/// Anything that turns a prompt into generated text
///
/// Implemented by [`CompletionClient`](crate::CompletionClient); request
/// handlers depend on this trait so they can run against a canned backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single-turn prompt
    async fn generate_text(&self, prompt: &str, options: &GenerateOptions) -> Result<String, CompletionError>;
}
