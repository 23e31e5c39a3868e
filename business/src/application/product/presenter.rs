use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::presenter::ProductPresenter;
use crate::domain::product::view::ProductView;
use crate::domain::shared::events::{EventSender, Inbox, StoreEvent};
use crate::domain::shared::presenter::Presenter;

enum ProductAction {
    Clicked(Product),
    AddToCart(Product),
    RemoveFromCart(Product),
}

/// Presents one product card. The product itself never changes, so handlers
/// re-render the card and publish the intent for the rest of the storefront.
pub struct ProductPresenterImpl {
    model: Product,
    view: Box<dyn ProductView>,
    events: EventSender,
    logger: Arc<dyn Logger>,
    inbox: Inbox<ProductAction>,
    initialized: bool,
}

impl ProductPresenterImpl {
    pub fn new(
        model: Product,
        view: Box<dyn ProductView>,
        events: EventSender,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            model,
            view,
            events,
            logger,
            inbox: Inbox::new(),
            initialized: false,
        }
    }

    fn publish(&self, event: StoreEvent) {
        if self.events.send(event).is_err() {
            self.logger.warn(&format!(
                "Event bus closed, dropping intent for {}",
                self.model.id()
            ));
        }
    }
}

impl Presenter for ProductPresenterImpl {
    fn init(&mut self) {
        if self.initialized {
            self.logger.warn(&format!(
                "Product presenter {} already initialized",
                self.model.id()
            ));
            return;
        }

        self.view.render(&self.model);
        self.view.on_product_clicked(
            self.inbox
                .forward(|p: &Product| ProductAction::Clicked(p.clone())),
        );
        self.view.on_add_to_cart_clicked(
            self.inbox
                .forward(|p: &Product| ProductAction::AddToCart(p.clone())),
        );
        self.view.on_remove_from_cart_clicked(
            self.inbox
                .forward(|p: &Product| ProductAction::RemoveFromCart(p.clone())),
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
                ProductAction::Clicked(p) => self.handle_product_click(p),
                ProductAction::AddToCart(p) => self.handle_add_to_cart(p),
                ProductAction::RemoveFromCart(p) => self.handle_remove_from_cart(p),
            }
        }
        count
    }
}

impl ProductPresenter for ProductPresenterImpl {
    fn model(&self) -> &Product {
        &self.model
    }

    fn handle_product_click(&mut self, product: Product) {
        self.logger.debug(&format!("Product selected: {}", product.id()));
        self.view.render(&self.model);
        self.publish(StoreEvent::ProductSelected(product));
    }

    fn handle_add_to_cart(&mut self, product: Product) {
        self.logger
            .info(&format!("Add to cart requested: {}", product.id()));
        self.view.render(&self.model);
        self.publish(StoreEvent::AddToCartRequested(product));
    }

    fn handle_remove_from_cart(&mut self, product: Product) {
        self.logger
            .info(&format!("Remove from cart requested: {}", product.id()));
        self.view.render(&self.model);
        self.publish(StoreEvent::RemoveFromCartRequested(product));
    }
}
