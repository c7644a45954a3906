//! Repository layer: the catalogue store port and its implementations
//!
//! Stores hold films and nothing else. They perform no validation and never
//! reject duplicate names; every catalogue rule lives in the service layer.

pub mod films;

use thiserror::Error;

use crate::models::Film;

pub use films::InMemoryCatalogue;

/// Errors raised by a catalogue store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No film carries the requested name
    #[error("film {name:?} was not found")]
    NotFound { name: String },

    /// The store could not serve the request
    #[error("catalogue store unavailable: {message}")]
    Unavailable { message: String },
}

/// Storage capability consumed by the catalogue service
#[cfg_attr(test, mockall::automock)]
pub trait CatalogueStore: Send + Sync {
    /// First film whose name equals `name` exactly
    fn find_by_name(&self, name: &str) -> Result<Film, StoreError>;

    /// Append a film as is
    fn insert(&self, film: Film) -> Result<(), StoreError>;

    /// Number of stored films
    fn count(&self) -> Result<usize, StoreError>;
}
