use super::store_api_config::{ConfigError, StoreApiConfig};

pub struct AppConfig {
    pub store_api: StoreApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            store_api: StoreApiConfig::from_env()?,
        })
    }
}
