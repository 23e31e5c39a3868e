use crate::domain::product::model::Product;
use crate::domain::shared::events::Callback;

use super::model::Cart;

/// Displays the whole cart with its derived total.
pub trait CartView {
    fn render(&mut self, cart: &Cart);
    /// The callback receives the rendered item the user asked to remove.
    fn on_remove_from_cart_clicked(&mut self, callback: Callback<Product>);
}
