pub mod app_config;
pub mod store_api_config;
