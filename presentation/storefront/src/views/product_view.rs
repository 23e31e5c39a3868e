use std::cell::RefCell;
use std::rc::Rc;

use business::domain::product::model::Product;
use business::domain::product::view::ProductView;
use business::domain::shared::events::Callback;

use super::format_cost;
use super::surface::{Gesture, Surface};

/// Product card rendered as a text block.
pub struct TextProductView {
    surface: Surface,
    product: Rc<RefCell<Option<Product>>>,
}

impl TextProductView {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            product: Rc::new(RefCell::new(None)),
        }
    }

    #[allow(dead_code)]
    pub fn last_rendered(&self) -> Option<Product> {
        self.product.borrow().clone()
    }

    /// Calls `callback` with the held product whenever `gesture` reaches the
    /// surface. Clicks before the first render are ignored.
    fn listen(&self, gesture: Gesture, callback: Callback<Product>) {
        let product = self.product.clone();
        self.surface.add_listener(Box::new(move |received: &Gesture| {
            if *received != gesture {
                return;
            }
            if let Some(product) = product.borrow().as_ref() {
                callback(product);
            }
        }));
    }
}

impl ProductView for TextProductView {
    fn render(&mut self, product: &Product) {
        *self.product.borrow_mut() = Some(product.clone());
        self.surface.set_content(format!(
            "[{}] {}\n{}\n{}\n{}",
            product.kind(),
            product.name(),
            format_cost(product),
            product.description(),
            product.image()
        ));
    }

    fn on_product_clicked(&mut self, callback: Callback<Product>) {
        self.listen(Gesture::Click, callback);
    }

    fn on_add_to_cart_clicked(&mut self, callback: Callback<Product>) {
        self.listen(Gesture::AddToCart, callback);
    }

    fn on_remove_from_cart_clicked(&mut self, callback: Callback<Product>) {
        self.listen(Gesture::RemoveFromCart, callback);
    }
}
