use crate::domain::product::model::Product;
use crate::domain::shared::presenter::Presenter;

use super::model::Cart;

pub trait CartPresenter: Presenter {
    fn model(&self) -> &Cart;
    fn handle_add_item(&mut self, product: Product);
    fn handle_remove_item(&mut self, product: Product);
    /// Delegates to [`Cart::total`].
    fn calculate_total(&self) -> usize;
    fn handle_clear(&mut self);
}
