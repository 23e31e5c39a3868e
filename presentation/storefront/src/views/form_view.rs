use std::cell::RefCell;
use std::rc::Rc;

use business::domain::order::model::OrderOutcome;
use business::domain::shared::events::Callback;
use business::domain::user_data::model::{UserData, UserField};
use business::domain::user_data::view::FormView;

use super::surface::{Gesture, Surface};

/// Order form. Typed input updates the form's own copy of the data before the
/// input callbacks fire, like a DOM input does.
pub struct TextFormView {
    surface: Surface,
    data: Rc<RefCell<UserData>>,
    status: Option<String>,
}

impl TextFormView {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            data: Rc::new(RefCell::new(UserData::default())),
            status: None,
        }
    }

    #[allow(dead_code)]
    pub fn last_rendered(&self) -> UserData {
        self.data.borrow().clone()
    }

    fn redraw(&self) {
        let data = self.data.borrow();
        let mut lines: Vec<String> = UserField::ALL
            .iter()
            .map(|field| format!("{}: {}", field, data.get(*field)))
            .collect();

        let missing = data.missing_fields();
        if !missing.is_empty() {
            let names = missing
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Missing: {}", names));
        }
        if let Some(status) = &self.status {
            lines.push(status.clone());
        }

        self.surface.set_content(lines.join("\n"));
    }
}

impl FormView for TextFormView {
    fn render(&mut self, data: &UserData) {
        *self.data.borrow_mut() = data.clone();
        self.redraw();
    }

    fn on_input_changed(&mut self, callback: Callback<UserData>) {
        let data = self.data.clone();
        self.surface.add_listener(Box::new(move |gesture: &Gesture| {
            if let Gesture::Input { field, value } = gesture {
                data.borrow_mut().set(*field, value.clone());
                callback(&*data.borrow());
            }
        }));
    }

    fn on_submit(&mut self, callback: Callback<UserData>) {
        let data = self.data.clone();
        self.surface.add_listener(Box::new(move |gesture: &Gesture| {
            if *gesture == Gesture::Submit {
                callback(&*data.borrow());
            }
        }));
    }

    fn show_order_result(&mut self, outcome: &OrderOutcome) {
        self.status = Some(match outcome {
            OrderOutcome::Placed { id, total } => {
                format!("Order {} placed, charged {} synapses", id, total)
            }
            OrderOutcome::Rejected(error) => format!("Order failed: {}", error),
        });
        self.redraw();
    }
}
