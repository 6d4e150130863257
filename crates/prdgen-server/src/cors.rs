use http::{Method, header};
use prdgen_config::{AllowedOrigins, CorsConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// Only what the generate endpoint needs: `GET`/`POST` with a JSON body.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    layer = match &config.origins {
        AllowedOrigins::Any => layer.allow_origin(AllowOrigin::any()),
        AllowedOrigins::List(origins) => {
            let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            layer.allow_origin(origins)
        }
    };

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}
