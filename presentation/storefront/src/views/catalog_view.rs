use business::domain::catalog::view::CatalogView;
use business::domain::product::model::Product;

use super::format_cost;
use super::surface::Surface;

/// Numbered gallery listing, read-only.
pub struct TextCatalogView {
    surface: Surface,
    products: Vec<Product>,
}

impl TextCatalogView {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            products: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn last_rendered(&self) -> &[Product] {
        &self.products
    }
}

impl CatalogView for TextCatalogView {
    fn render(&mut self, products: &[Product]) {
        self.products = products.to_vec();
        let content = if products.is_empty() {
            "Catalog is empty".to_string()
        } else {
            products
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{:>2}. {} ({})", i + 1, p.name(), format_cost(p)))
                .collect::<Vec<_>>()
                .join("\n")
        };
        self.surface.set_content(content);
    }
}
