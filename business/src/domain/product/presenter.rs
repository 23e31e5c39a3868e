use crate::domain::shared::presenter::Presenter;

use super::model::Product;

pub trait ProductPresenter: Presenter {
    fn model(&self) -> &Product;
    fn handle_product_click(&mut self, product: Product);
    fn handle_add_to_cart(&mut self, product: Product);
    fn handle_remove_from_cart(&mut self, product: Product);
}
