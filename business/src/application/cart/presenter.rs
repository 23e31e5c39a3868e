use std::sync::Arc;

use crate::domain::cart::model::Cart;
use crate::domain::cart::presenter::CartPresenter;
use crate::domain::cart::view::CartView;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::shared::events::Inbox;
use crate::domain::shared::presenter::Presenter;

enum CartAction {
    Remove(Product),
}

pub struct CartPresenterImpl {
    model: Cart,
    view: Box<dyn CartView>,
    logger: Arc<dyn Logger>,
    inbox: Inbox<CartAction>,
    initialized: bool,
}

impl CartPresenterImpl {
    pub fn new(model: Cart, view: Box<dyn CartView>, logger: Arc<dyn Logger>) -> Self {
        Self {
            model,
            view,
            logger,
            inbox: Inbox::new(),
            initialized: false,
        }
    }
}

impl Presenter for CartPresenterImpl {
    fn init(&mut self) {
        if self.initialized {
            self.logger.warn("Cart presenter already initialized");
            return;
        }

        self.view.render(&self.model);
        self.view.on_remove_from_cart_clicked(
            self.inbox
                .forward(|p: &Product| CartAction::Remove(p.clone())),
        );
        self.initialized = true;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn process_pending(&mut self) -> usize {
        let actions = self.inbox.drain();
        let count = actions.len();
        for action in actions {
            match action {
                CartAction::Remove(p) => self.handle_remove_item(p),
            }
        }
        count
    }
}

impl CartPresenter for CartPresenterImpl {
    fn model(&self) -> &Cart {
        &self.model
    }

    fn handle_add_item(&mut self, product: Product) {
        let id = product.id().clone();
        if self.model.add_item(product) {
            self.logger.info(&format!("Added to cart: {}", id));
        } else {
            self.logger.debug(&format!("Already in cart: {}", id));
        }
        self.view.render(&self.model);
    }

    fn handle_remove_item(&mut self, product: Product) {
        if self.model.remove_item(&product) {
            self.logger
                .info(&format!("Removed from cart: {}", product.id()));
        } else {
            self.logger.debug(&format!("Not in cart: {}", product.id()));
        }
        self.view.render(&self.model);
    }

    fn calculate_total(&self) -> usize {
        self.model.total()
    }

    fn handle_clear(&mut self) {
        self.logger
            .info(&format!("Clearing cart of {} items", self.model.len()));
        self.model.clear();
        self.view.render(&self.model);
    }
}
