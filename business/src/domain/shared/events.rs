use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::product::model::Product;
use crate::domain::user_data::model::UserData;

/// Callback registered on a view for one user gesture.
/// It receives the entity the view last rendered.
pub type Callback<T> = Box<dyn Fn(&T)>;

/// Additive set of callbacks for one gesture, notified in registration order.
pub struct Subscribers<T> {
    callbacks: Vec<Callback<T>>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, callback: Callback<T>) {
        self.callbacks.push(callback);
    }

    pub fn notify(&self, payload: &T) {
        for callback in &self.callbacks {
            callback(payload);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue between a presenter and the callbacks it registers on its own view.
///
/// A callback cannot call back into the presenter that owns the view while the
/// view is notifying, so it only enqueues an action. The presenter drains the
/// queue afterwards and runs one handler per action.
pub struct Inbox<A> {
    sender: UnboundedSender<A>,
    receiver: UnboundedReceiver<A>,
}

impl<A: 'static> Inbox<A> {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Builds a view callback that enqueues the action produced by `to_action`.
    pub fn forward<T>(&self, to_action: impl Fn(&T) -> A + 'static) -> Callback<T> {
        let sender = self.sender.clone();
        Box::new(move |payload: &T| {
            // The receiver lives as long as the inbox, so sending cannot fail
            // while the presenter is alive.
            let _ = sender.send(to_action(payload));
        })
    }

    /// Takes every queued action in arrival order.
    pub fn drain(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.receiver.try_recv() {
            actions.push(action);
        }
        actions
    }
}

impl<A: 'static> Default for Inbox<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Intents published by one presenter for another part of the storefront.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ProductSelected(Product),
    AddToCartRequested(Product),
    RemoveFromCartRequested(Product),
    CheckoutRequested(UserData),
}

pub type EventSender = UnboundedSender<StoreEvent>;
pub type EventReceiver = UnboundedReceiver<StoreEvent>;

/// Creates the bus shared by every presenter of a session.
pub fn event_bus() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
