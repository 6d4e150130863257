//! Splits raw completion text into the PRD and Todo sections

use std::sync::OnceLock;

use http::StatusCode;
use regex::Regex;
use thiserror::Error;

use crate::document::ParsedDocument;
use crate::error::HttpError;
use crate::prompt::{PRD_END, PRD_START, TODO_END, TODO_START};

/// The completion text did not contain both delimited sections
///
/// Deliberately carries no detail about which section failed: a partial
/// document is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse response: could not find properly delimited PRD and Todo sections")]
pub struct ParseError;

impl HttpError for ParseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    fn error_type(&self) -> &str {
        "parse_error"
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

/// Build a lazy, dot-matches-newline pattern capturing text between two markers
fn section_pattern(start: &str, end: &str) -> Regex {
    Regex::new(&format!(r"(?s){}\s*(.*?)\s*{}", regex::escape(start), regex::escape(end)))
        .expect("must be valid regex")
}

fn prd_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| section_pattern(PRD_START, PRD_END))
}

fn todo_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| section_pattern(TODO_START, TODO_END))
}

/// Extract the first non-empty capture of `re` from `raw`, trimmed
fn extract<'a>(re: &Regex, raw: &'a str) -> Option<&'a str> {
    let section = re.captures(raw)?.get(1)?.as_str().trim();
    (!section.is_empty()).then_some(section)
}

/// Parse a raw completion into its PRD and Todo sections
///
/// Each section is the text between the first opening marker and the nearest
/// closing marker after it. Text outside both pairs is discarded.
///
/// # Errors
///
/// Returns [`ParseError`] if either marker pair is missing or either section
/// is blank.
pub fn parse_response(raw: &str) -> Result<ParsedDocument, ParseError> {
    let prd = extract(prd_re(), raw);
    let todo = extract(todo_re(), raw);

    match (prd, todo) {
        (Some(prd), Some(todo)) => Ok(ParsedDocument {
            prd: prd.to_owned(),
            todo: todo.to_owned(),
        }),
        (prd, todo) => {
            tracing::debug!(
                prd_found = prd.is_some(),
                todo_found = todo.is_some(),
                raw_len = raw.len(),
                "completion text missing delimited sections"
            );
            Err(ParseError)
        }
    }
}
