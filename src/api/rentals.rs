//! Rental return endpoints

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::FilmReturn,
};

use super::AppJson;

/// One returned film
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RentalLine {
    /// Film name
    pub name: String,
    /// Number of days the film was rented
    pub days: u16,
}

impl RentalLine {
    fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.days > 0
    }
}

/// Return request
#[derive(Deserialize, ToSchema)]
pub struct ReturnRequest {
    #[serde(rename = "return")]
    pub rentals: Vec<RentalLine>,
}

/// Invoice for a processed return
#[derive(Serialize, ToSchema)]
pub struct InvoiceResponse {
    /// Priced rentals, in request order
    #[serde(rename = "return")]
    pub rentals: Vec<RentalLine>,
    /// Total price in the configured currency
    pub price: u64,
    pub currency: String,
    pub monetary_unit: String,
}

/// Process returned rentals and produce an invoice
#[utoipa::path(
    post,
    path = "/store/return",
    tag = "store",
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Invoice for the returned films", body = InvoiceResponse),
        (status = 400, description = "Malformed request or unknown films", body = crate::error::ErrorResponse)
    )
)]
pub async fn process_return(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<ReturnRequest>,
) -> AppResult<AppJson<InvoiceResponse>> {
    if request.rentals.is_empty() || !request.rentals.iter().all(RentalLine::is_valid) {
        return Err(AppError::BadRequest(
            "Return must list at least one film, each with a name and at least one day".to_string(),
        ));
    }

    let returns: Vec<FilmReturn> = request
        .rentals
        .into_iter()
        .map(|line| FilmReturn::new(line.name, line.days))
        .collect();

    let invoice = state.services.catalogue.process_return(&returns)?;
    let pricing = &state.config.pricing;

    Ok(AppJson(InvoiceResponse {
        rentals: invoice
            .rentals
            .into_iter()
            .map(|rental| RentalLine {
                name: rental.film.name,
                days: rental.days,
            })
            .collect(),
        price: invoice.total_cost,
        currency: pricing.currency.clone(),
        monetary_unit: pricing.monetary_unit.clone(),
    }))
}
