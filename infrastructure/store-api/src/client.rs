use reqwest::Client;
use url::Url;

/// Shared HTTP client configuration for the remote store service.
pub struct StoreApiClient {
    pub client: Client,
    pub api_url: Url,
    pub cdn_url: Url,
}

impl StoreApiClient {
    pub fn new(api_url: Url, cdn_url: Url) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url,
            cdn_url,
        }
    }

    /// Returns the catalog listing endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/product/", self.api_url.as_str().trim_end_matches('/'))
    }

    /// Returns the order submission endpoint URL.
    pub fn order_url(&self) -> String {
        format!("{}/order", self.api_url.as_str().trim_end_matches('/'))
    }

    /// Resolves a catalog image path against the CDN. Absolute URLs are kept.
    pub fn image_url(&self, image: &str) -> String {
        if Url::parse(image).is_ok() {
            return image.to_string();
        }
        format!(
            "{}/{}",
            self.cdn_url.as_str().trim_end_matches('/'),
            image.trim_start_matches('/')
        )
    }
}
