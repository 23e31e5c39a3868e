//! Wire records exchanged with the remote catalog and order service.

use serde::{Deserialize, Serialize};

use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProductItemResponse {
    pub id: String,
    pub description: String,
    pub image: String,
    pub title: String,
    pub category: String,
    pub price: Option<u64>,
}

/// Response of the "list catalog" query. `items: null` signals an empty or
/// failed listing and is kept apart from an empty array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProductListResponse {
    pub total: u64,
    pub items: Option<Vec<ApiProductItemResponse>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiOrderRequest {
    pub payment: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    /// Product identifiers, in cart order.
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiOrderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ApiProductItemResponse> for Product {
    fn from(item: ApiProductItemResponse) -> Self {
        Product::new(NewProductProps {
            id: ProductId::new(item.id),
            kind: item.category,
            name: item.title,
            cost: item.price,
            description: item.description,
            image: item.image,
        })
    }
}
