use crate::domain::shared::events::Callback;

use super::model::Product;

/// Displays one product card and reports clicks on it.
///
/// Every callback receives the product the view last rendered.
pub trait ProductView {
    fn render(&mut self, product: &Product);
    fn on_product_clicked(&mut self, callback: Callback<Product>);
    fn on_add_to_cart_clicked(&mut self, callback: Callback<Product>);
    fn on_remove_from_cart_clicked(&mut self, callback: Callback<Product>);
}
