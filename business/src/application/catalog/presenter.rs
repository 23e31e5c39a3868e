use std::sync::Arc;

use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::presenter::CatalogPresenter;
use crate::domain::catalog::view::CatalogView;
use crate::domain::logger::Logger;
use crate::domain::shared::presenter::Presenter;

/// Read-only gallery: renders the catalog once, listens to nothing.
pub struct CatalogPresenterImpl {
    model: Catalog,
    view: Box<dyn CatalogView>,
    logger: Arc<dyn Logger>,
    initialized: bool,
}

impl CatalogPresenterImpl {
    pub fn new(model: Catalog, view: Box<dyn CatalogView>, logger: Arc<dyn Logger>) -> Self {
        Self {
            model,
            view,
            logger,
            initialized: false,
        }
    }
}

impl Presenter for CatalogPresenterImpl {
    fn init(&mut self) {
        if self.initialized {
            self.logger.warn("Catalog presenter already initialized");
            return;
        }

        self.logger
            .info(&format!("Rendering catalog of {} products", self.model.len()));
        self.view.render(self.model.items());
        self.initialized = true;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn process_pending(&mut self) -> usize {
        0
    }
}

impl CatalogPresenter for CatalogPresenterImpl {
    fn model(&self) -> &Catalog {
        &self.model
    }
}
