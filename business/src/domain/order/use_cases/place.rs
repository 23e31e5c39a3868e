use async_trait::async_trait;

use crate::domain::api::model::ApiOrderRequest;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderOutcome;

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, order: ApiOrderRequest) -> Result<OrderOutcome, OrderError>;
}
