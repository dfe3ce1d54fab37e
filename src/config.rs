use std::collections::HashMap;
use std::path::Path;

use dotenv::dotenv;
use envsubst::substitute;
use serde::Deserialize;
use thiserror::Error;

use crate::model::Credentials;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to substitute environment variables: {0}")]
    Substitute(String),

    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    /// Used by the binary to sign in on start-up.
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

impl Config {
    /// Loads the YAML file at `path`, substituting `${API_*}` and `${AUTH_*}`
    /// placeholders from the environment (and `.env`).
    pub async fn from_yaml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenv().ok();

        let path = path.as_ref();
        let file_content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;

        let env_vars: HashMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("API_") || key.starts_with("AUTH_"))
            .collect();

        let interpolated = substitute(&file_content, &env_vars)
            .map_err(|e| ConfigError::Substitute(e.to_string()))?;

        Self::from_yaml_str(&interpolated)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    fn validate(&self) -> Result<(), ConfigError> {
        reqwest::Url::parse(&self.api.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.api.base_url.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}
