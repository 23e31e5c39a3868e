#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.incomplete_contact")]
    IncompleteContact,
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("store_api.failure")]
    Api(#[from] crate::domain::errors::StoreApiError),
}
