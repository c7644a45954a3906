//! Catalogue service: film insertion, lookup and return invoicing

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Film, FilmDraft, FilmReturn, Invoice, RateCard},
    repository::{CatalogueStore, StoreError},
};

use super::returns;

#[derive(Clone)]
pub struct CatalogueService {
    store: Arc<dyn CatalogueStore>,
    rates: RateCard,
}

impl CatalogueService {
    pub fn new(store: Arc<dyn CatalogueStore>, rates: RateCard) -> Self {
        Self { store, rates }
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    /// Number of films in the catalogue
    pub fn count(&self) -> AppResult<usize> {
        Ok(self.store.count()?)
    }

    /// Find a film by its exact name
    pub fn find(&self, name: &str) -> AppResult<Film> {
        tracing::debug!("Catalogue lookup: {:?}", name);
        self.store.find_by_name(name).map_err(lookup_error)
    }

    /// Validate and append a new film, rejecting names already present.
    ///
    /// The lookup and the insert are two separate store calls; concurrent
    /// callers adding the same name can both succeed.
    pub fn add_film(&self, name: &str, director: &str, release: &str) -> AppResult<Film> {
        let film = FilmDraft::new(name, director, release).validate()?;

        match self.store.find_by_name(&film.name) {
            Ok(_) => {
                tracing::warn!("Catalogue insert rejected: {:?} already exists", film.name);
                Err(AppError::FilmAlreadyExists(film.name))
            }
            Err(StoreError::NotFound { .. }) => {
                self.store.insert(film.clone())?;
                tracing::info!(
                    "Catalogue insert: {:?} by {:?} ({})",
                    film.name,
                    film.director,
                    film.release
                );
                Ok(film)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Price a return. Any unknown film voids the whole invoice.
    pub fn process_return(&self, requests: &[FilmReturn]) -> AppResult<Invoice> {
        let (batch, errors) = returns::build_batch(self.store.as_ref(), requests)?;
        if !errors.is_empty() {
            tracing::warn!(
                "Return rejected: {} of {} films unknown",
                errors.len(),
                requests.len()
            );
            return Err(AppError::InvalidRentalRequest(errors));
        }

        let invoice = batch.invoice(&self.rates);
        tracing::info!(
            "Return invoiced: {} rentals, total {}",
            invoice.rentals.len(),
            invoice.total_cost
        );
        Ok(invoice)
    }
}

fn lookup_error(error: StoreError) -> AppError {
    match error {
        StoreError::NotFound { name } => AppError::FilmNotFound(name),
        other => AppError::Storage(other),
    }
}
