use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::api::model::ApiOrderRequest;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderOutcome;
use crate::domain::order::services::OrderSubmitter;
use crate::domain::order::use_cases::place::PlaceOrderUseCase;

pub struct PlaceOrderUseCaseImpl {
    pub submitter: Arc<dyn OrderSubmitter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, order: ApiOrderRequest) -> Result<OrderOutcome, OrderError> {
        self.logger.info(&format!(
            "Submitting order: {} items, total {}",
            order.items.len(),
            order.total
        ));

        let response = self.submitter.submit_order(&order).await.map_err(|e| {
            self.logger.error(&format!("Order submission failed: {}", e));
            OrderError::Api(e)
        })?;

        let outcome = OrderOutcome::from(response);
        match &outcome {
            OrderOutcome::Placed { id, .. } => {
                self.logger.info(&format!("Order accepted: {}", id))
            }
            OrderOutcome::Rejected(error) => {
                self.logger.warn(&format!("Order rejected: {}", error))
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api::model::ApiOrderResponse;
    use crate::domain::errors::StoreApiError;
    use crate::test_support::mock_logger;
    use mockall::mock;

    mock! {
        pub Submitter {}

        #[async_trait]
        impl OrderSubmitter for Submitter {
            async fn submit_order(&self, order: &ApiOrderRequest) -> Result<ApiOrderResponse, StoreApiError>;
        }
    }

    fn order() -> ApiOrderRequest {
        ApiOrderRequest {
            payment: "online".to_string(),
            email: "test@test.ru".to_string(),
            phone: "+71234567890".to_string(),
            address: "Spb Vosstania 1".to_string(),
            total: 2200,
            items: vec!["854cef69".to_string(), "c101ab44".to_string()],
        }
    }

    #[tokio::test]
    async fn should_place_order_when_store_accepts() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit_order()
            .withf(|order| order.total == 2200 && order.items.len() == 2)
            .times(1)
            .returning(|_| {
                Ok(ApiOrderResponse {
                    id: Some("28c57cb4".to_string()),
                    total: Some(2200),
                    error: None,
                })
            });

        let use_case = PlaceOrderUseCaseImpl {
            submitter: Arc::new(submitter),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(order()).await.unwrap();

        assert_eq!(
            outcome,
            OrderOutcome::Placed {
                id: "28c57cb4".to_string(),
                total: 2200
            }
        );
    }

    #[tokio::test]
    async fn should_surface_store_rejection_without_retry() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit_order().times(1).returning(|_| {
            Ok(ApiOrderResponse {
                error: Some("Неверная сумма заказа".to_string()),
                ..ApiOrderResponse::default()
            })
        });

        let use_case = PlaceOrderUseCaseImpl {
            submitter: Arc::new(submitter),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(order()).await.unwrap();

        assert_eq!(
            outcome,
            OrderOutcome::Rejected("Неверная сумма заказа".to_string())
        );
    }

    #[tokio::test]
    async fn should_return_api_error_on_transport_failure() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit_order()
            .returning(|_| Err(StoreApiError::Status(502)));

        let use_case = PlaceOrderUseCaseImpl {
            submitter: Arc::new(submitter),
            logger: mock_logger(),
        };

        let result = use_case.execute(order()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Api(StoreApiError::Status(502))
        ));
    }
}
