//! Completion API client for prdgen
//!
//! Sends one chat-completion request per call to an OpenAI-compatible
//! endpoint (Groq by default) and returns the generated text or a typed
//! [`CompletionError`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod client;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod types;

pub use client::CompletionClient;
pub use error::CompletionError;
pub use generator::{GenerateOptions, TextGenerator};
pub use pipeline::{GenerationError, generate_document};
pub use types::{Choice, ChoiceMessage, CompletionRequest, CompletionResponse, Message, Role};
