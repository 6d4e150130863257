use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// Upper bound on prompt length accepted by `/api/generate`, in characters
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 5000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cors: Option<CorsConfig>,
    /// Maximum prompt length in characters
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            health: HealthConfig::default(),
            cors: None,
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_prompt_chars() -> usize {
    DEFAULT_MAX_PROMPT_CHARS
}
