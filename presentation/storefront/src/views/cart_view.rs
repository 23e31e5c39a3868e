use std::cell::RefCell;
use std::rc::Rc;

use business::domain::cart::model::Cart;
use business::domain::cart::view::CartView;
use business::domain::product::model::Product;
use business::domain::shared::events::Callback;

use super::format_cost;
use super::surface::{Gesture, Surface};

/// Basket listing with one delete button per row.
pub struct TextCartView {
    surface: Surface,
    items: Rc<RefCell<Vec<Product>>>,
}

impl TextCartView {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    #[allow(dead_code)]
    pub fn last_rendered(&self) -> Vec<Product> {
        self.items.borrow().clone()
    }
}

impl CartView for TextCartView {
    fn render(&mut self, cart: &Cart) {
        *self.items.borrow_mut() = cart.items().to_vec();

        let mut lines: Vec<String> = cart
            .items()
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:>2}. {} ({})", i + 1, p.name(), format_cost(p)))
            .collect();
        if lines.is_empty() {
            lines.push("Cart is empty".to_string());
        }
        lines.push(format!("Items: {}", cart.total()));
        lines.push(format!("Sum: {} synapses", cart.total_cost()));

        self.surface.set_content(lines.join("\n"));
    }

    fn on_remove_from_cart_clicked(&mut self, callback: Callback<Product>) {
        let items = self.items.clone();
        self.surface.add_listener(Box::new(move |gesture: &Gesture| {
            if let Gesture::RemoveAt(index) = gesture
                && let Some(product) = items.borrow().get(*index)
            {
                callback(product);
            }
        }));
    }
}
