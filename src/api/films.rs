//! Film catalogue endpoints

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{Film, ReleaseTier},
};

use super::AppJson;

/// Film to add; the release tier comes from the path
#[derive(Deserialize, ToSchema)]
pub struct AddFilmRequest {
    /// Unique film name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub director: String,
}

/// Film as stored in the catalogue
#[derive(Serialize, ToSchema)]
pub struct FilmResponse {
    pub name: String,
    pub director: String,
    pub release: ReleaseTier,
}

impl From<Film> for FilmResponse {
    fn from(film: Film) -> Self {
        Self {
            name: film.name,
            director: film.director,
            release: film.release,
        }
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindFilmQuery {
    /// Exact, case-sensitive film name
    pub name: Option<String>,
}

/// Add a film to the catalogue
#[utoipa::path(
    post,
    path = "/catalogue/film/{release}",
    tag = "catalogue",
    params(
        ("release" = String, Path, description = "Release tier: new, regular or old (any case)")
    ),
    request_body = AddFilmRequest,
    responses(
        (status = 200, description = "Film added", body = FilmResponse),
        (status = 400, description = "Invalid film or unknown release tier", body = crate::error::ErrorResponse),
        (status = 409, description = "A film with this name already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_film(
    State(state): State<crate::AppState>,
    Path(release): Path<String>,
    AppJson(request): AppJson<AddFilmRequest>,
) -> AppResult<AppJson<FilmResponse>> {
    let film = state
        .services
        .catalogue
        .add_film(&request.name, &request.director, &release)?;
    Ok(AppJson(film.into()))
}

/// Find a film by name
#[utoipa::path(
    get,
    path = "/catalogue/film",
    tag = "catalogue",
    params(FindFilmQuery),
    responses(
        (status = 200, description = "Film found", body = FilmResponse),
        (status = 400, description = "Missing name parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Film not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn find_film(
    State(state): State<crate::AppState>,
    Query(query): Query<FindFilmQuery>,
) -> AppResult<AppJson<FilmResponse>> {
    let name = query
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("Expected query parameter \"name\" in url".to_string())
        })?;

    let film = state.services.catalogue.find(&name)?;
    Ok(AppJson(film.into()))
}
