use std::sync::Arc;

use crate::domain::api::model::ApiOrderRequest;
use crate::domain::cart::presenter::CartPresenter;
use crate::domain::catalog::presenter::CatalogPresenter;
use crate::domain::logger::Logger;
use crate::domain::order::model::OrderOutcome;
use crate::domain::product::model::Product;
use crate::domain::product::presenter::ProductPresenter;
use crate::domain::shared::events::{EventReceiver, StoreEvent};
use crate::domain::user_data::presenter::FormPresenter;

/// Every presenter of one storefront session plus the bus they publish on.
///
/// The host feeds user gestures to the views, then calls [`pump`] so queued
/// view events and cross-presenter intents are handled one at a time.
///
/// [`pump`]: StorefrontSession::pump
pub struct StorefrontSession {
    catalog: Box<dyn CatalogPresenter>,
    products: Vec<Box<dyn ProductPresenter>>,
    cart: Box<dyn CartPresenter>,
    form: Box<dyn FormPresenter>,
    events: EventReceiver,
    logger: Arc<dyn Logger>,
    selected: Option<Product>,
}

impl StorefrontSession {
    pub fn new(
        catalog: Box<dyn CatalogPresenter>,
        products: Vec<Box<dyn ProductPresenter>>,
        cart: Box<dyn CartPresenter>,
        form: Box<dyn FormPresenter>,
        events: EventReceiver,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            catalog,
            products,
            cart,
            form,
            events,
            logger,
            selected: None,
        }
    }

    pub fn init(&mut self) {
        self.catalog.init();
        for product in &mut self.products {
            product.init();
        }
        self.cart.init();
        self.form.init();
        self.logger.info(&format!(
            "Storefront session ready: {} product cards",
            self.products.len()
        ));
    }

    /// Handles everything queued until no presenter has work left.
    ///
    /// Returns the assembled order when the form requested a checkout.
    pub fn pump(&mut self) -> Option<ApiOrderRequest> {
        let mut checkout = None;
        loop {
            let mut handled = self.catalog.process_pending();
            for product in &mut self.products {
                handled += product.process_pending();
            }
            handled += self.cart.process_pending();
            handled += self.form.process_pending();

            while let Ok(event) = self.events.try_recv() {
                handled += 1;
                self.route(event, &mut checkout);
            }

            if handled == 0 {
                break;
            }
        }
        checkout
    }

    fn route(&mut self, event: StoreEvent, checkout: &mut Option<ApiOrderRequest>) {
        match event {
            StoreEvent::ProductSelected(product) => {
                self.logger
                    .debug(&format!("Previewing product {}", product.id()));
                self.selected = Some(product);
            }
            StoreEvent::AddToCartRequested(product) => self.cart.handle_add_item(product),
            StoreEvent::RemoveFromCartRequested(product) => self.cart.handle_remove_item(product),
            StoreEvent::CheckoutRequested(contact) => {
                match ApiOrderRequest::assemble(self.cart.model(), &contact) {
                    Ok(order) => {
                        if checkout.is_some() {
                            self.logger.warn("Checkout requested twice, keeping the latest");
                        }
                        *checkout = Some(order);
                    }
                    Err(e) => {
                        self.logger.warn(&format!("Checkout refused: {}", e));
                        self.form
                            .handle_order_result(&OrderOutcome::Rejected(e.to_string()));
                    }
                }
            }
        }
    }

    /// Reports the store's answer on the form and empties the cart once the
    /// order was placed.
    pub fn complete_order(&mut self, outcome: &OrderOutcome) {
        self.form.handle_order_result(outcome);
        if outcome.is_placed() {
            self.cart.handle_clear();
        }
    }

    pub fn catalog(&self) -> &dyn CatalogPresenter {
        self.catalog.as_ref()
    }

    pub fn products(&self) -> &[Box<dyn ProductPresenter>] {
        &self.products
    }

    pub fn cart(&self) -> &dyn CartPresenter {
        self.cart.as_ref()
    }

    pub fn form(&self) -> &dyn FormPresenter {
        self.form.as_ref()
    }

    /// The product last clicked on a card, if any.
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }
}
