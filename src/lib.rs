//! Video Store
//!
//! Film catalogue and rental invoicing server: records films by release
//! tier, looks them up by name, and prices returned rentals.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire services over the given catalogue store
    pub fn new(config: AppConfig, store: Arc<dyn repository::CatalogueStore>) -> Self {
        let services = services::Services::new(store, config.pricing.rate_card());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
