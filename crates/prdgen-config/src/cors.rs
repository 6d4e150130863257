use std::time::Duration;

use serde::Deserialize;

/// CORS configuration for the generate endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AllowedOrigins,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

/// Either any origin or an explicit list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawOrigins")]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrigins {
    One(String),
    Many(Vec<String>),
}

impl From<RawOrigins> for AllowedOrigins {
    fn from(raw: RawOrigins) -> Self {
        let origins = match raw {
            RawOrigins::One(origin) => vec![origin],
            RawOrigins::Many(origins) => origins,
        };

        if origins.iter().any(|o| o == "*") {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_string() {
        let config: CorsConfig = toml::from_str(r#"origins = "*""#).unwrap();
        assert_eq!(config.origins, AllowedOrigins::Any);
    }

    #[test]
    fn wildcard_inside_list() {
        let config: CorsConfig = toml::from_str(r#"origins = ["https://a.dev", "*"]"#).unwrap();
        assert_eq!(config.origins, AllowedOrigins::Any);
    }

    #[test]
    fn explicit_list() {
        let config: CorsConfig = toml::from_str("origins = [\"https://a.dev\"]\nmax_age = 60").unwrap();
        assert_eq!(config.origins, AllowedOrigins::List(vec!["https://a.dev".to_owned()]));
        assert_eq!(config.max_age_duration(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn defaults_to_any() {
        let config: CorsConfig = toml::from_str("").unwrap();
        assert_eq!(config.origins, AllowedOrigins::Any);
        assert!(config.max_age.is_none());
    }
}
