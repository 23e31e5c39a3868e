use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Products offered in this session, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Product>,
}

impl Catalog {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    /// The backing sequence, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
