//! In-memory film catalogue

use std::sync::{PoisonError, RwLock};

use super::{CatalogueStore, StoreError};
use crate::models::Film;

/// Append-only catalogue kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryCatalogue {
    films: RwLock<Vec<Film>>,
}

impl InMemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue seeded with the given films, in order
    pub fn with_films(films: impl IntoIterator<Item = Film>) -> Self {
        Self {
            films: RwLock::new(films.into_iter().collect()),
        }
    }

    /// Copy of every stored film
    pub fn films(&self) -> Vec<Film> {
        self.films
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CatalogueStore for InMemoryCatalogue {
    fn find_by_name(&self, name: &str) -> Result<Film, StoreError> {
        // A writer can only panic between push calls, so the data is intact
        let films = self.films.read().unwrap_or_else(PoisonError::into_inner);
        films
            .iter()
            .find(|film| film.name == name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    fn insert(&self, film: Film) -> Result<(), StoreError> {
        self.films
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(film);
        Ok(())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.films.read().unwrap_or_else(PoisonError::into_inner).len())
    }
}
