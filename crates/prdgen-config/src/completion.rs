use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Environment variable holding the completion API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";
/// Environment variable holding the completion endpoint URL
pub const API_URL_ENV: &str = "GROQ_API_URL";

/// Hosted model used when none is configured
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Sampling temperature used when none is configured
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Completion API configuration
///
/// `api_key` and `api_url` may be left out of the file; they are then read
/// from [`API_KEY_ENV`] and [`API_URL_ENV`]. Their absence is reported when
/// the client is constructed, not when configuration loads.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Bearer token for the completion API
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Full URL of the chat completions endpoint
    #[serde(default)]
    pub api_url: Option<Url>,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature (0.0 to 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens to generate
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: None,
        }
    }
}

impl CompletionConfig {
    /// Defaults with credentials taken from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if [`API_URL_ENV`] is set but is not a valid URL
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.fill_from_env()?;
        Ok(config)
    }

    /// Fill unset credentials from the environment
    ///
    /// Empty variables count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if [`API_URL_ENV`] is set but is not a valid URL
    pub fn fill_from_env(&mut self) -> anyhow::Result<()> {
        if self.api_key.is_none() {
            self.api_key = non_empty_var(API_KEY_ENV).map(SecretString::from);
        }

        if self.api_url.is_none()
            && let Some(raw) = non_empty_var(API_URL_ENV)
        {
            let url = Url::parse(&raw).map_err(|e| anyhow::anyhow!("{API_URL_ENV} is not a valid URL: {e}"))?;
            self.api_url = Some(url);
        }

        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn from_env_reads_both_values() {
        let vars = [
            (API_KEY_ENV, Some("test-api-key")),
            (API_URL_ENV, Some("https://api.groq.com/openai/v1/chat/completions")),
        ];
        temp_env::with_vars(vars, || {
            let config = CompletionConfig::from_env().unwrap();
            assert_eq!(config.api_key.unwrap().expose_secret(), "test-api-key");
            assert_eq!(
                config.api_url.unwrap().as_str(),
                "https://api.groq.com/openai/v1/chat/completions"
            );
            assert_eq!(config.model, DEFAULT_MODEL);
            assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        });
    }

    #[test]
    fn from_env_leaves_missing_values_unset() {
        temp_env::with_vars_unset([API_KEY_ENV, API_URL_ENV], || {
            let config = CompletionConfig::from_env().unwrap();
            assert!(config.api_key.is_none());
            assert!(config.api_url.is_none());
        });
    }

    #[test]
    fn empty_variables_count_as_unset() {
        temp_env::with_vars([(API_KEY_ENV, Some("")), (API_URL_ENV, Some(""))], || {
            let config = CompletionConfig::from_env().unwrap();
            assert!(config.api_key.is_none());
            assert!(config.api_url.is_none());
        });
    }

    #[test]
    fn invalid_url_is_rejected() {
        temp_env::with_var(API_URL_ENV, Some("not a url"), || {
            let err = CompletionConfig::from_env().unwrap_err();
            assert!(err.to_string().contains(API_URL_ENV));
        });
    }

    #[test]
    fn configured_values_win_over_environment() {
        temp_env::with_var(API_KEY_ENV, Some("from-env"), || {
            let mut config = CompletionConfig {
                api_key: Some(SecretString::from("from-file")),
                ..CompletionConfig::default()
            };
            config.fill_from_env().unwrap();
            assert_eq!(config.api_key.unwrap().expose_secret(), "from-file");
        });
    }
}
