//! Builders and recording fakes shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use mockall::mock;

use crate::domain::cart::model::Cart;
use crate::domain::cart::view::CartView;
use crate::domain::catalog::view::CatalogView;
use crate::domain::logger::Logger;
use crate::domain::order::model::OrderOutcome;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::view::ProductView;
use crate::domain::shared::events::{Callback, Subscribers};
use crate::domain::shared::value_objects::ProductId;
use crate::domain::user_data::model::UserData;
use crate::domain::user_data::view::FormView;

pub fn product(id: &str, cost: Option<u64>) -> Product {
    product_named(id, &format!("Product {}", id), cost)
}

pub fn product_named(id: &str, name: &str, cost: Option<u64>) -> Product {
    Product::new(NewProductProps {
        id: ProductId::new(id),
        kind: "другое".to_string(),
        name: name.to_string(),
        cost,
        description: "Description".to_string(),
        image: "/Shell.svg".to_string(),
    })
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub Gallery {}

    impl CatalogView for Gallery {
        fn render(&mut self, products: &[Product]);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

#[derive(Default)]
pub struct ProductViewState {
    pub renders: Vec<Product>,
    pub clicked: Subscribers<Product>,
    pub add: Subscribers<Product>,
    pub remove: Subscribers<Product>,
}

/// ProductView that records renders; the test keeps the state handle to
/// simulate clicks.
#[derive(Clone, Default)]
pub struct FakeProductView {
    pub state: Rc<RefCell<ProductViewState>>,
}

impl FakeProductView {
    fn snapshot(&self) -> Product {
        self.state
            .borrow()
            .renders
            .last()
            .cloned()
            .expect("view rendered before click")
    }

    pub fn click(&self) {
        let product = self.snapshot();
        self.state.borrow().clicked.notify(&product);
    }

    pub fn click_add(&self) {
        let product = self.snapshot();
        self.state.borrow().add.notify(&product);
    }

    pub fn click_remove(&self) {
        let product = self.snapshot();
        self.state.borrow().remove.notify(&product);
    }

    pub fn render_count(&self) -> usize {
        self.state.borrow().renders.len()
    }
}

impl ProductView for FakeProductView {
    fn render(&mut self, product: &Product) {
        self.state.borrow_mut().renders.push(product.clone());
    }
    fn on_product_clicked(&mut self, callback: Callback<Product>) {
        self.state.borrow_mut().clicked.subscribe(callback);
    }
    fn on_add_to_cart_clicked(&mut self, callback: Callback<Product>) {
        self.state.borrow_mut().add.subscribe(callback);
    }
    fn on_remove_from_cart_clicked(&mut self, callback: Callback<Product>) {
        self.state.borrow_mut().remove.subscribe(callback);
    }
}

#[derive(Default)]
pub struct FormViewState {
    pub renders: Vec<UserData>,
    pub outcomes: Vec<OrderOutcome>,
    pub input: Subscribers<UserData>,
    pub submit: Subscribers<UserData>,
}

#[derive(Clone, Default)]
pub struct FakeFormView {
    pub state: Rc<RefCell<FormViewState>>,
}

impl FakeFormView {
    /// Simulates the user typing: the callback receives the edited data.
    pub fn type_in(&self, data: UserData) {
        self.state.borrow().input.notify(&data);
    }

    pub fn submit(&self) {
        let data = self.last_render().unwrap_or_default();
        self.state.borrow().submit.notify(&data);
    }

    pub fn last_render(&self) -> Option<UserData> {
        self.state.borrow().renders.last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.state.borrow().renders.len()
    }
}

impl FormView for FakeFormView {
    fn render(&mut self, data: &UserData) {
        self.state.borrow_mut().renders.push(data.clone());
    }
    fn on_input_changed(&mut self, callback: Callback<UserData>) {
        self.state.borrow_mut().input.subscribe(callback);
    }
    fn on_submit(&mut self, callback: Callback<UserData>) {
        self.state.borrow_mut().submit.subscribe(callback);
    }
    fn show_order_result(&mut self, outcome: &OrderOutcome) {
        self.state.borrow_mut().outcomes.push(outcome.clone());
    }
}

#[derive(Default)]
pub struct CartViewState {
    pub renders: Vec<Cart>,
    pub remove: Subscribers<Product>,
}

#[derive(Clone, Default)]
pub struct FakeCartView {
    pub state: Rc<RefCell<CartViewState>>,
}

impl FakeCartView {
    /// Simulates a click on the delete button of the rendered item at `index`.
    pub fn click_remove_at(&self, index: usize) {
        let product = self
            .last_render()
            .and_then(|cart| cart.items().get(index).cloned())
            .expect("rendered item at index");
        self.state.borrow().remove.notify(&product);
    }

    pub fn last_render(&self) -> Option<Cart> {
        self.state.borrow().renders.last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.state.borrow().renders.len()
    }
}

impl CartView for FakeCartView {
    fn render(&mut self, cart: &Cart) {
        self.state.borrow_mut().renders.push(cart.clone());
    }
    fn on_remove_from_cart_clicked(&mut self, callback: Callback<Product>) {
        self.state.borrow_mut().remove.subscribe(callback);
    }
}
