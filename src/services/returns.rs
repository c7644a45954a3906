//! Rental return aggregation

use crate::{
    error::{AppError, AppResult},
    models::{FilmReturn, RentalReturn},
    repository::{CatalogueStore, StoreError},
};

/// Resolve every requested return against the catalogue, in request order.
///
/// Unknown films are collected as `FilmNotFound` errors and skipped; the
/// remaining requests are still resolved. Any other store failure aborts.
pub fn build_batch(
    store: &dyn CatalogueStore,
    requests: &[FilmReturn],
) -> AppResult<(RentalReturn, Vec<AppError>)> {
    let mut batch = RentalReturn::default();
    let mut errors = Vec::new();

    for request in requests {
        match store.find_by_name(&request.film_name) {
            Ok(film) => batch.add_rental(film, request.days),
            Err(StoreError::NotFound { name }) => errors.push(AppError::FilmNotFound(name)),
            Err(e) => return Err(e.into()),
        }
    }

    Ok((batch, errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Film, ReleaseTier},
        repository::InMemoryCatalogue,
    };

    fn catalogue() -> InMemoryCatalogue {
        InMemoryCatalogue::with_films([
            Film::new("Loki", "Marvel", ReleaseTier::New),
            Film::new("Morbius", "Marvel", ReleaseTier::Old),
        ])
    }

    #[test]
    fn test_empty_request() {
        let (batch, errors) = build_batch(&catalogue(), &[]).unwrap();
        assert!(batch.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_partial_batch_and_errors_in_order() {
        let requests = [
            FilmReturn::new("Dune", 1),
            FilmReturn::new("Loki", 2),
            FilmReturn::new("Tenet", 3),
            FilmReturn::new("Morbius", 4),
        ];
        let (batch, errors) = build_batch(&catalogue(), &requests).unwrap();

        let resolved: Vec<_> = batch
            .rentals
            .iter()
            .map(|r| (r.film.name.as_str(), r.days))
            .collect();
        assert_eq!(resolved, [("Loki", 2), ("Morbius", 4)]);

        let missing: Vec<_> = errors
            .iter()
            .map(|e| match e {
                AppError::FilmNotFound(name) => name.as_str(),
                other => panic!("unexpected error {:?}", other),
            })
            .collect();
        assert_eq!(missing, ["Dune", "Tenet"]);
    }

    #[test]
    fn test_repeated_unknown_name_reported_each_time() {
        let requests = [FilmReturn::new("Dune", 1), FilmReturn::new("Dune", 2)];
        let (_, errors) = build_batch(&catalogue(), &requests).unwrap();
        assert_eq!(errors.len(), 2);
    }
}
