use crate::domain::api::model::{ApiOrderRequest, ApiOrderResponse};
use crate::domain::cart::model::Cart;
use crate::domain::user_data::model::UserData;

use super::errors::OrderError;

/// What the remote service answered to an order submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Placed { id: String, total: u64 },
    Rejected(String),
}

impl OrderOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, OrderOutcome::Placed { .. })
    }
}

impl From<ApiOrderResponse> for OrderOutcome {
    fn from(response: ApiOrderResponse) -> Self {
        match response.error {
            Some(error) => OrderOutcome::Rejected(error),
            None => OrderOutcome::Placed {
                id: response.id.unwrap_or_default(),
                total: response.total.unwrap_or(0),
            },
        }
    }
}

impl ApiOrderRequest {
    /// Builds the outbound order from the cart and the contact details.
    ///
    /// The amount is the summed cost of the cart, never its item count.
    pub fn assemble(cart: &Cart, contact: &UserData) -> Result<Self, OrderError> {
        if !contact.is_valid() {
            return Err(OrderError::IncompleteContact);
        }
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        Ok(Self {
            payment: contact.delivery_method.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            address: contact.address.clone(),
            total: cart.total_cost(),
            items: cart
                .items()
                .iter()
                .map(|p| p.id().as_str().to_string())
                .collect(),
        })
    }
}
