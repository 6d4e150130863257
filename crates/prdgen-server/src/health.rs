use axum::{Router, routing};
use prdgen_config::HealthConfig;

/// Liveness route at the configured path, or nothing when disabled
///
/// The check does not touch the completion API.
pub fn health_router(config: &HealthConfig) -> Router {
    if !config.enabled {
        return Router::new();
    }

    Router::new().route(&config.path, routing::get(|| async { "ok" }))
}
