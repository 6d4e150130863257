#![allow(clippy::must_use_candidate)]

pub mod completion;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use completion::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level prdgen configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion API configuration
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
