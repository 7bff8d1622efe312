use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_products {
            ProductStore::seeded()
        } else {
            ProductStore::new()
        };

        Self::new(store)
    }
}
