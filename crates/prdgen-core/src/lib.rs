//! Prompt construction and response parsing for PRD generation
//!
//! Everything in this crate is pure: no I/O beyond the optional file export
//! on [`ParsedDocument`], and no network access.

#![allow(clippy::must_use_candidate)]

pub mod document;
mod error;
pub mod parser;
pub mod prompt;

pub use document::ParsedDocument;
pub use error::HttpError;
pub use parser::{ParseError, parse_response};
pub use prompt::{PRD_END, PRD_START, TODO_END, TODO_START, build_system_prompt, build_user_prompt};
