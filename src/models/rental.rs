//! Rental returns and invoices

use serde::{Deserialize, Serialize};

use super::{film::Film, pricing::RateCard};

/// One requested return, before the film is looked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmReturn {
    pub film_name: String,
    pub days: u16,
}

impl FilmReturn {
    pub fn new(film_name: impl Into<String>, days: u16) -> Self {
        Self {
            film_name: film_name.into(),
            days,
        }
    }
}

/// Returned rental of a film known to the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalLineItem {
    pub film: Film,
    pub days: u16,
}

/// Line items of a single return, in the order they were requested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RentalReturn {
    pub rentals: Vec<RentalLineItem>,
}

/// Priced return
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub rentals: Vec<RentalLineItem>,
    pub total_cost: u64,
}

impl RentalReturn {
    pub fn add_rental(&mut self, film: Film, days: u16) {
        self.rentals.push(RentalLineItem { film, days });
    }

    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    /// Sum the price of every line item, keeping the items in order
    pub fn invoice(self, rates: &RateCard) -> Invoice {
        let total_cost = self
            .rentals
            .iter()
            .map(|rental| rates.price(rental.film.release, rental.days))
            .fold(0u64, u64::saturating_add);

        Invoice {
            rentals: self.rentals,
            total_cost,
        }
    }
}
