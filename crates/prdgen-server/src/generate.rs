//! `POST /api/generate`

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, routing};
use prdgen_core::ParsedDocument;
use prdgen_llm::{TextGenerator, generate_document};
use serde::Deserialize;

use crate::error::ApiError;

/// Shared, immutable state for the generate route
#[derive(Clone)]
pub struct GenerateState {
    generator: Arc<dyn TextGenerator>,
    max_prompt_chars: usize,
}

impl GenerateState {
    pub fn new(generator: Arc<dyn TextGenerator>, max_prompt_chars: usize) -> Self {
        Self {
            generator,
            max_prompt_chars,
        }
    }
}

/// Request body for `/api/generate`
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Build the router for the generate endpoint
pub fn generate_router(state: GenerateState) -> Router {
    Router::new()
        .route("/api/generate", routing::post(generate_handler))
        .with_state(state)
}

/// Check prompt length in characters against `1..=max_chars`
fn validate_prompt(prompt: &str, max_chars: usize) -> Result<(), ApiError> {
    let chars = prompt.chars().count();

    let problem = if chars == 0 {
        "Prompt is required".to_owned()
    } else if chars > max_chars {
        format!("Prompt is too long ({chars} characters, maximum is {max_chars})")
    } else {
        return Ok(());
    };

    Err(ApiError::InvalidRequest { details: vec![problem] })
}

async fn generate_handler(
    State(state): State<GenerateState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<ParsedDocument>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidRequest {
        details: vec![rejection.body_text()],
    })?;

    validate_prompt(&request.prompt, state.max_prompt_chars)?;

    tracing::info!(prompt_chars = request.prompt.chars().count(), "generating PRD and Todo list");

    let document = generate_document(state.generator.as_ref(), &request.prompt).await?;

    Ok(Json(document))
}
