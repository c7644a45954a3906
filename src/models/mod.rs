//! Data models for the video store

pub mod film;
pub mod pricing;
pub mod rental;

// Re-export commonly used types
pub use film::{Film, FilmDraft, ReleaseTier, ValidationErrors, ValidationIssue};
pub use pricing::{RateCard, BASIC, PREMIUM};
pub use rental::{FilmReturn, Invoice, RentalLineItem, RentalReturn};
