/// Errors raised by adapters of the remote store service.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StoreApiError {
    #[error("store_api.transport")]
    Transport,
    #[error("store_api.status_{0}")]
    Status(u16),
    #[error("store_api.invalid_response")]
    InvalidResponse,
}

impl StoreApiError {
    pub fn transport() -> Self {
        StoreApiError::Transport
    }
    pub fn status(code: u16) -> Self {
        StoreApiError::Status(code)
    }
    pub fn invalid_response() -> Self {
        StoreApiError::InvalidResponse
    }
}
