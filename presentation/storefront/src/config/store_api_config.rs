use std::env;

use url::Url;

const DEFAULT_ORIGIN: &str = "https://larek-api.nomoreparties.co";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_origin: {0}")]
    InvalidOrigin(String),
}

/// Endpoints of the remote store service.
#[derive(Debug, Clone)]
pub struct StoreApiConfig {
    pub api_url: Url,
    pub cdn_url: Url,
}

impl StoreApiConfig {
    /// Load store endpoints from environment variables
    ///
    /// Environment variables:
    /// - STORE_API_ORIGIN: scheme and host of the store service
    ///   (default: "https://larek-api.nomoreparties.co")
    pub fn from_env() -> Result<Self, ConfigError> {
        let origin = env::var("STORE_API_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        Self::from_origin(&origin)
    }

    /// Derives the API and CDN base URLs from the service origin.
    pub fn from_origin(origin: &str) -> Result<Self, ConfigError> {
        let parsed =
            Url::parse(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidOrigin(origin.to_string()));
        }

        let base = origin.trim_end_matches('/');
        let api_url = Url::parse(&format!("{}/api/weblarek", base))
            .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))?;
        let cdn_url = Url::parse(&format!("{}/content/weblarek", base))
            .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))?;

        Ok(Self { api_url, cdn_url })
    }
}
