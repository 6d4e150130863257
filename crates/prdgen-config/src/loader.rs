use std::path::Path;

use url::Url;

use crate::{AllowedOrigins, CompletionConfig, Config};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, deserializes,
    /// fills missing completion credentials from the environment, then
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let mut config = Self::parse(&raw)?;
        config.completion.fill_from_env()?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Configuration without a file: defaults plus credentials from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds an invalid endpoint URL
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            completion: CompletionConfig::from_env()?,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Expand placeholders in raw TOML and deserialize it
    fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric setting is out of range or a CORS
    /// origin is not a valid URL
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_completion_config()?;
        self.validate_server_config()?;
        Ok(())
    }

    fn validate_completion_config(&self) -> anyhow::Result<()> {
        let completion = &self.completion;

        if !(0.0..=2.0).contains(&completion.temperature) {
            anyhow::bail!(
                "completion.temperature must be between 0.0 and 2.0, got {}",
                completion.temperature
            );
        }

        if completion.model.trim().is_empty() {
            anyhow::bail!("completion.model must not be empty");
        }

        if completion.max_tokens == Some(0) {
            anyhow::bail!("completion.max_tokens must be greater than 0");
        }

        Ok(())
    }

    fn validate_server_config(&self) -> anyhow::Result<()> {
        if self.server.max_prompt_chars == 0 {
            anyhow::bail!("server.max_prompt_chars must be greater than 0");
        }

        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        if let Some(ref cors) = self.server.cors
            && let AllowedOrigins::List(ref origins) = cors.origins
        {
            for origin in origins {
                Url::parse(origin).map_err(|e| anyhow::anyhow!("invalid CORS origin '{origin}': {e}"))?;
            }
        }

        Ok(())
    }
}
