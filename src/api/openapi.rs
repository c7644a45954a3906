//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{films, health, rentals};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Video Store API",
        version = "0.1.0",
        description = "Film catalogue and rental invoicing REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalogue
        films::add_film,
        films::find_film,
        // Store
        rentals::process_return,
    ),
    components(
        schemas(
            // Catalogue
            films::AddFilmRequest,
            films::FilmResponse,
            crate::models::ReleaseTier,
            // Store
            rentals::RentalLine,
            rentals::ReturnRequest,
            rentals::InvoiceResponse,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalogue", description = "Film catalogue"),
        (name = "store", description = "Rental returns and invoicing")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
