use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::services::CatalogSource;
use crate::domain::catalog::use_cases::load::LoadCatalogUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

pub struct LoadCatalogUseCaseImpl {
    pub source: Arc<dyn CatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self) -> Result<Catalog, CatalogError> {
        self.logger.info("Loading catalog");

        let listing = self.source.list_products().await.map_err(|e| {
            self.logger.error(&format!("Catalog listing failed: {}", e));
            CatalogError::Api(e)
        })?;

        let Some(items) = listing.items else {
            self.logger.warn("Catalog listing returned no items field");
            return Err(CatalogError::Unavailable);
        };

        if listing.total != items.len() as u64 {
            self.logger.debug(&format!(
                "Catalog total {} differs from {} listed items",
                listing.total,
                items.len()
            ));
        }

        let catalog = Catalog::new(items.into_iter().map(Product::from).collect());
        self.logger
            .info(&format!("Catalog loaded: {} products", catalog.len()));
        Ok(catalog)
    }
}
