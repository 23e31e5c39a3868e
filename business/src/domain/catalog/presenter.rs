use crate::domain::shared::presenter::Presenter;

use super::model::Catalog;

pub trait CatalogPresenter: Presenter {
    fn model(&self) -> &Catalog;
}
