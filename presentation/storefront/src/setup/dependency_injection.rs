use std::sync::Arc;

use logger::TracingLogger;
use store_api::catalog_source::CatalogSourceHttp;
use store_api::client::StoreApiClient;
use store_api::order_submitter::OrderSubmitterHttp;

use business::application::cart::presenter::CartPresenterImpl;
use business::application::catalog::load::LoadCatalogUseCaseImpl;
use business::application::catalog::presenter::CatalogPresenterImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::product::presenter::ProductPresenterImpl;
use business::application::session::StorefrontSession;
use business::application::user_data::presenter::FormPresenterImpl;
use business::domain::cart::model::Cart;
use business::domain::catalog::model::Catalog;
use business::domain::catalog::use_cases::load::LoadCatalogUseCase;
use business::domain::logger::Logger;
use business::domain::order::use_cases::place::PlaceOrderUseCase;
use business::domain::product::presenter::ProductPresenter;
use business::domain::shared::events::event_bus;
use business::domain::user_data::model::UserData;

use crate::config::app_config::AppConfig;
use crate::views::cart_view::TextCartView;
use crate::views::catalog_view::TextCatalogView;
use crate::views::form_view::TextFormView;
use crate::views::product_view::TextProductView;
use crate::views::surface::Surface;

/// Surfaces of one session, kept by the host to print them and to inject
/// gestures.
pub struct Screens {
    pub catalog: Surface,
    pub cards: Vec<Surface>,
    pub cart: Surface,
    pub form: Surface,
}

pub struct DependencyContainer {
    pub logger: Arc<dyn Logger>,
    pub load_catalog: Arc<dyn LoadCatalogUseCase>,
    pub place_order: Arc<dyn PlaceOrderUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let store = &config.store_api;
        let catalog_source = Arc::new(CatalogSourceHttp::new(StoreApiClient::new(
            store.api_url.clone(),
            store.cdn_url.clone(),
        )));
        let order_submitter = Arc::new(OrderSubmitterHttp::new(StoreApiClient::new(
            store.api_url.clone(),
            store.cdn_url.clone(),
        )));

        // Use cases
        let load_catalog = Arc::new(LoadCatalogUseCaseImpl {
            source: catalog_source,
            logger: logger.clone(),
        });
        let place_order = Arc::new(PlaceOrderUseCaseImpl {
            submitter: order_submitter,
            logger: logger.clone(),
        });

        Self {
            logger,
            load_catalog,
            place_order,
        }
    }

    /// Builds one presenter per view over fresh surfaces: a card per catalog
    /// product, the gallery, the cart and the order form.
    pub fn assemble_session(&self, catalog: Catalog) -> (StorefrontSession, Screens) {
        let (sender, receiver) = event_bus();

        let mut cards = Vec::new();
        let mut product_presenters: Vec<Box<dyn ProductPresenter>> = Vec::new();
        for (index, product) in catalog.items().iter().enumerate() {
            let surface = Surface::new(format!("card-{}", index + 1));
            cards.push(surface.clone());
            product_presenters.push(Box::new(ProductPresenterImpl::new(
                product.clone(),
                Box::new(TextProductView::new(surface)),
                sender.clone(),
                self.logger.clone(),
            )));
        }

        let screens = Screens {
            catalog: Surface::new("catalog"),
            cards,
            cart: Surface::new("cart"),
            form: Surface::new("form"),
        };

        let catalog_presenter = CatalogPresenterImpl::new(
            catalog,
            Box::new(TextCatalogView::new(screens.catalog.clone())),
            self.logger.clone(),
        );
        let cart_presenter = CartPresenterImpl::new(
            Cart::new(),
            Box::new(TextCartView::new(screens.cart.clone())),
            self.logger.clone(),
        );
        let form_presenter = FormPresenterImpl::new(
            UserData::default(),
            Box::new(TextFormView::new(screens.form.clone())),
            sender,
            self.logger.clone(),
        );

        let session = StorefrontSession::new(
            Box::new(catalog_presenter),
            product_presenters,
            Box::new(cart_presenter),
            Box::new(form_presenter),
            receiver,
            self.logger.clone(),
        );

        (session, screens)
    }
}
