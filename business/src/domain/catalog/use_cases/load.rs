use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Catalog;

#[async_trait]
pub trait LoadCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<Catalog, CatalogError>;
}
