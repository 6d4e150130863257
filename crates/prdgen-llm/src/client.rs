//! HTTP client for an OpenAI-compatible chat completions endpoint

use async_trait::async_trait;
use prdgen_config::{API_KEY_ENV, API_URL_ENV, CompletionConfig};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::{CompletionError, DEFAULT_TRANSPORT_MESSAGE};
use crate::generator::{GenerateOptions, TextGenerator};
use crate::types::{CompletionRequest, CompletionResponse};

/// Error body returned by the provider on failure
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: Option<ProviderErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: Option<String>,
}

/// Client for one completion endpoint and one model
///
/// Holds no per-request state; concurrent calls are independent. There is
/// no retry and no request timeout.
pub struct CompletionClient {
    client: Client,
    api_url: Url,
    api_key: SecretString,
    model: String,
    temperature: f64,
    max_tokens: Option<u32>,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("api_url", &self.api_url.as_str())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    /// Create from completion configuration
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Configuration` naming the missing value if
    /// the API key or the API URL is absent. The key is checked first.
    pub fn new(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| CompletionError::Configuration(format!("{API_KEY_ENV} environment variable is not set")))?;

        let api_url = config
            .api_url
            .clone()
            .ok_or_else(|| CompletionError::Configuration(format!("{API_URL_ENV} environment variable is not set")))?;

        tracing::debug!(api_url = %api_url, model = %config.model, "completion client initialized");

        Ok(Self {
            client: Client::new(),
            api_url,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Create from `GROQ_API_KEY` and `GROQ_API_URL`
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Configuration` if either variable is unset
    /// or the URL does not parse
    pub fn from_env() -> Result<Self, CompletionError> {
        let config = CompletionConfig::from_env().map_err(|e| CompletionError::Configuration(e.to_string()))?;
        Self::new(&config)
    }

    /// Send a completion request and validate the response shape
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::MalformedRequest` without contacting the
    /// provider if `body` has no messages or a misplaced system message,
    /// `CompletionError::Transport` if the request fails or the provider
    /// answers with a non-success status, and `CompletionError::Validation`
    /// if a success body does not decode.
    pub async fn send_request(&self, body: &CompletionRequest) -> Result<CompletionResponse, CompletionError> {
        if let Some(problem) = body.shape_problem() {
            return Err(CompletionError::MalformedRequest {
                detail: problem.to_owned(),
            });
        }

        tracing::debug!(
            model = %body.model,
            messages = body.messages.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "completion request failed");
                CompletionError::Transport {
                    status: None,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_TRANSPORT_MESSAGE.to_owned());

            tracing::warn!(status = %status, message = %message, "completion API returned error");

            return Err(CompletionError::Transport {
                status: Some(status),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(|e| CompletionError::Transport {
            status: Some(status),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "completion response failed validation");
            CompletionError::Validation { detail: e.to_string() }
        })
    }

    /// Generate text for a single prompt
    ///
    /// Sends a system message first when `options.system_prompt` is set,
    /// followed by exactly one user message.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`send_request`](Self::send_request) and
    /// returns `CompletionError::EmptyResult` if no choice carries text.
    pub async fn generate_text(&self, prompt: &str, options: &GenerateOptions) -> Result<String, CompletionError> {
        let request = CompletionRequest::single_turn(
            self.model.as_str(),
            options.system_prompt.as_deref(),
            prompt,
            options.temperature.unwrap_or(self.temperature),
            options.max_tokens.or(self.max_tokens),
        );

        let response = self.send_request(&request).await?;

        let text = response.first_text().ok_or(CompletionError::EmptyResult)?;

        tracing::debug!(
            response_id = %response.id,
            finish_reason = response.choices[0].finish_reason.as_deref().unwrap_or("none"),
            chars = text.len(),
            "completion received"
        );

        Ok(text.to_owned())
    }
}

#[async_trait]
impl TextGenerator for CompletionClient {
    async fn generate_text(&self, prompt: &str, options: &GenerateOptions) -> Result<String, CompletionError> {
        Self::generate_text(self, prompt, options).await
    }
}
