//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use prdgen_config::{CompletionConfig, Config, CorsConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no credentials
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                completion: CompletionConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Point the completion client at a mock backend
    pub fn with_completion_api(mut self, api_url: &str) -> Self {
        self.config.completion.api_key = Some(SecretString::from("test-api-key"));
        self.config.completion.api_url = Some(api_url.parse().expect("valid URL"));
        self
    }

    /// Cap sampled tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.config.completion.max_tokens = Some(max_tokens);
        self
    }

    /// Set the prompt length limit
    pub fn with_max_prompt_chars(mut self, max: usize) -> Self {
        self.config.server.max_prompt_chars = max;
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
