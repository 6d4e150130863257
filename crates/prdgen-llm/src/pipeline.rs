//! Prompt → completion → parsed document, as one call

use http::StatusCode;
use prdgen_core::{HttpError, ParseError, ParsedDocument, build_system_prompt, build_user_prompt, parse_response};
use thiserror::Error;

use crate::error::CompletionError;
use crate::generator::{GenerateOptions, TextGenerator};

/// Failure anywhere between sending the prompt and splitting the reply
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Completion round trip failed
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Completion text lacked the delimited sections
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl HttpError for GenerationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Completion(e) => e.status_code(),
            Self::Parse(e) => e.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Completion(e) => e.error_type(),
            Self::Parse(e) => e.error_type(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Completion(e) => e.client_message(),
            Self::Parse(e) => e.client_message(),
        }
    }
}

/// Generate a PRD and Todo list for a project description
///
/// `user_input` must already be validated by the caller. Exactly one
/// completion call is made.
pub async fn generate_document(
    generator: &dyn TextGenerator,
    user_input: &str,
) -> Result<ParsedDocument, GenerationError> {
    let options = GenerateOptions::with_system_prompt(build_system_prompt());
    let prompt = build_user_prompt(user_input);

    let raw = generator.generate_text(&prompt, &options).await?;

    let document = parse_response(&raw).inspect_err(|_| {
        tracing::warn!(raw_chars = raw.len(), "completion did not contain delimited sections");
    })?;

    tracing::debug!(
        prd_chars = document.prd.len(),
        todo_chars = document.todo.len(),
        "document generated"
    );

    Ok(document)
}
