#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unavailable")]
    Unavailable,
    #[error("store_api.failure")]
    Api(#[from] crate::domain::errors::StoreApiError),
}
