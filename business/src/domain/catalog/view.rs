use crate::domain::product::model::Product;

/// Read-only gallery of the catalog.
pub trait CatalogView {
    fn render(&mut self, products: &[Product]);
}
