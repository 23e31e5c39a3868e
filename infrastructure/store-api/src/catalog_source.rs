use async_trait::async_trait;

use business::domain::api::model::ApiProductListResponse;
use business::domain::catalog::services::CatalogSource;
use business::domain::errors::StoreApiError;

use crate::client::StoreApiClient;

pub struct CatalogSourceHttp {
    client: StoreApiClient,
}

impl CatalogSourceHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }

    fn resolve_images(&self, mut listing: ApiProductListResponse) -> ApiProductListResponse {
        if let Some(items) = listing.items.as_mut() {
            for item in items {
                item.image = self.client.image_url(&item.image);
            }
        }
        listing
    }
}

#[async_trait]
impl CatalogSource for CatalogSourceHttp {
    async fn list_products(&self) -> Result<ApiProductListResponse, StoreApiError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await
            .map_err(|_| StoreApiError::Transport)?;

        if !response.status().is_success() {
            return Err(StoreApiError::Status(response.status().as_u16()));
        }

        let listing: ApiProductListResponse = response
            .json()
            .await
            .map_err(|_| StoreApiError::InvalidResponse)?;

        Ok(self.resolve_images(listing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::api::model::ApiProductItemResponse;
    use url::Url;

    #[test]
    fn should_resolve_every_image_and_keep_missing_items() {
        let source = CatalogSourceHttp::new(StoreApiClient::new(
            Url::parse("http://localhost:3000/api/weblarek").unwrap(),
            Url::parse("http://localhost:3000/content/weblarek").unwrap(),
        ));

        let listing = source.resolve_images(ApiProductListResponse {
            total: 1,
            items: Some(vec![ApiProductItemResponse {
                id: "854cef69".to_string(),
                description: "Description".to_string(),
                image: "/5_Dots.svg".to_string(),
                title: "+1 час в сутках".to_string(),
                category: "софт-скил".to_string(),
                price: Some(750),
            }]),
        });
        let missing = source.resolve_images(ApiProductListResponse {
            total: 0,
            items: None,
        });

        assert_eq!(
            listing.items.unwrap()[0].image,
            "http://localhost:3000/content/weblarek/5_Dots.svg"
        );
        assert!(missing.items.is_none());
    }
}
