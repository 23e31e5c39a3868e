use crate::domain::order::model::OrderOutcome;
use crate::domain::shared::presenter::Presenter;

use super::model::UserData;

pub trait FormPresenter: Presenter {
    fn model(&self) -> &UserData;
    fn handle_input_change(&mut self, data: UserData);
    fn handle_submit(&mut self, data: UserData);
    fn handle_order_result(&mut self, outcome: &OrderOutcome);
}
