use async_trait::async_trait;

use crate::domain::api::model::ApiProductListResponse;
use crate::domain::errors::StoreApiError;

/// Service port listing the products offered by the remote store.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_products(&self) -> Result<ApiProductListResponse, StoreApiError>;
}
