use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::order::model::OrderOutcome;
use crate::domain::shared::events::{EventSender, Inbox, StoreEvent};
use crate::domain::shared::presenter::Presenter;
use crate::domain::user_data::model::UserData;
use crate::domain::user_data::presenter::FormPresenter;
use crate::domain::user_data::view::FormView;

enum FormAction {
    InputChanged(UserData),
    Submitted(UserData),
}

pub struct FormPresenterImpl {
    model: UserData,
    view: Box<dyn FormView>,
    events: EventSender,
    logger: Arc<dyn Logger>,
    inbox: Inbox<FormAction>,
    initialized: bool,
}

impl FormPresenterImpl {
    pub fn new(
        model: UserData,
        view: Box<dyn FormView>,
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
}

impl Presenter for FormPresenterImpl {
    fn init(&mut self) {
        if self.initialized {
            self.logger.warn("Form presenter already initialized");
            return;
        }

        self.view.render(&self.model);
        self.view.on_input_changed(
            self.inbox
                .forward(|data: &UserData| FormAction::InputChanged(data.clone())),
        );
        self.view.on_submit(
            self.inbox
                .forward(|data: &UserData| FormAction::Submitted(data.clone())),
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
                FormAction::InputChanged(data) => self.handle_input_change(data),
                FormAction::Submitted(data) => self.handle_submit(data),
            }
        }
        count
    }
}

impl FormPresenter for FormPresenterImpl {
    fn model(&self) -> &UserData {
        &self.model
    }

    fn handle_input_change(&mut self, data: UserData) {
        self.model = data;
        self.logger.debug(&format!(
            "Order form changed, complete: {}",
            self.model.is_valid()
        ));
        self.view.render(&self.model);
    }

    fn handle_submit(&mut self, data: UserData) {
        self.model = data;
        self.view.render(&self.model);

        if !self.model.is_valid() {
            let missing = self
                .model
                .missing_fields()
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            self.logger
                .warn(&format!("Order form submitted incomplete, missing: {}", missing));
            return;
        }

        self.logger.info("Order form submitted");
        if self
            .events
            .send(StoreEvent::CheckoutRequested(self.model.clone()))
            .is_err()
        {
            self.logger.warn("Event bus closed, dropping checkout request");
        }
    }

    fn handle_order_result(&mut self, outcome: &OrderOutcome) {
        match outcome {
            OrderOutcome::Placed { id, total } => self
                .logger
                .info(&format!("Order placed: {} ({} synapses)", id, total)),
            OrderOutcome::Rejected(error) => self
                .logger
                .warn(&format!("Order rejected by store: {}", error)),
        }
        self.view.show_order_result(outcome);
    }
}
