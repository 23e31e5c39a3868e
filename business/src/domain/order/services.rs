use async_trait::async_trait;

use crate::domain::api::model::{ApiOrderRequest, ApiOrderResponse};
use crate::domain::errors::StoreApiError;

/// Service port handing an assembled order to the remote store.
///
/// An `Ok` response may still carry an `error` field: that is a rejection by
/// the service, not a transport failure.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit_order(
        &self,
        order: &ApiOrderRequest,
    ) -> Result<ApiOrderResponse, StoreApiError>;
}
