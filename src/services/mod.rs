//! Business logic services

pub mod catalogue;
pub mod returns;

use std::sync::Arc;

use crate::{models::RateCard, repository::CatalogueStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalogue: catalogue::CatalogueService,
}

impl Services {
    /// Create all services over the given catalogue store
    pub fn new(store: Arc<dyn CatalogueStore>, rates: RateCard) -> Self {
        Self {
            catalogue: catalogue::CatalogueService::new(store, rates),
        }
    }
}
