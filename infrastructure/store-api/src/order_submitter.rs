use async_trait::async_trait;

use business::domain::api::model::{ApiOrderRequest, ApiOrderResponse};
use business::domain::errors::StoreApiError;
use business::domain::order::services::OrderSubmitter;

use crate::client::StoreApiClient;

pub struct OrderSubmitterHttp {
    client: StoreApiClient,
}

impl OrderSubmitterHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }

    /// The store answers rejected orders with a 4xx status and an `{error}`
    /// body, so the body is read whatever the status.
    fn interpret(status: u16, body: &[u8]) -> Result<ApiOrderResponse, StoreApiError> {
        let success = (200..300).contains(&status);
        match serde_json::from_slice::<ApiOrderResponse>(body) {
            Ok(parsed) if success || parsed.error.is_some() => Ok(parsed),
            Ok(_) => Err(StoreApiError::Status(status)),
            Err(_) if success => Err(StoreApiError::InvalidResponse),
            Err(_) => Err(StoreApiError::Status(status)),
        }
    }
}

#[async_trait]
impl OrderSubmitter for OrderSubmitterHttp {
    async fn submit_order(
        &self,
        order: &ApiOrderRequest,
    ) -> Result<ApiOrderResponse, StoreApiError> {
        let response = self
            .client
            .client
            .post(self.client.order_url())
            .json(order)
            .send()
            .await
            .map_err(|_| StoreApiError::Transport)?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|_| StoreApiError::Transport)?;

        Self::interpret(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_success_body() {
        let response =
            OrderSubmitterHttp::interpret(200, br#"{"id":"28c57cb4","total":2200}"#).unwrap();

        assert_eq!(response.id.as_deref(), Some("28c57cb4"));
        assert_eq!(response.total, Some(2200));
    }

    #[test]
    fn should_pass_through_rejection_body_on_client_error() {
        let response =
            OrderSubmitterHttp::interpret(400, r#"{"error":"Неверная сумма заказа"}"#.as_bytes())
                .unwrap();

        assert_eq!(response.error.as_deref(), Some("Неверная сумма заказа"));
    }

    #[test]
    fn should_report_status_when_error_body_unreadable() {
        let result = OrderSubmitterHttp::interpret(502, b"<html>Bad Gateway</html>");

        assert!(matches!(result.unwrap_err(), StoreApiError::Status(502)));
    }

    #[test]
    fn should_report_invalid_response_when_success_body_unreadable() {
        let result = OrderSubmitterHttp::interpret(200, b"not json");

        assert!(matches!(result.unwrap_err(), StoreApiError::InvalidResponse));
    }

    #[test]
    fn should_report_status_when_error_status_carries_no_error_field() {
        let result = OrderSubmitterHttp::interpret(500, b"{}");

        assert!(matches!(result.unwrap_err(), StoreApiError::Status(500)));
    }
}
