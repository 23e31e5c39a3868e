use crate::domain::order::model::OrderOutcome;
use crate::domain::shared::events::Callback;

use super::model::UserData;

/// Order form. Input and submit callbacks receive the form's current data.
pub trait FormView {
    fn render(&mut self, data: &UserData);
    fn on_input_changed(&mut self, callback: Callback<UserData>);
    fn on_submit(&mut self, callback: Callback<UserData>);
    fn show_order_result(&mut self, outcome: &OrderOutcome);
}
