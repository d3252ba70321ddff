//! Request handlers
//!
//! The `#[utoipa::path]` attributes feed the document served at
//! `/openapi.json`.

use alien_core::{Alien, AlienFilter, CoreError, QueryService};
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use tracing::debug;

use crate::error::{ApiError, ErrorBody};

#[utoipa::path(
    get,
    path = "/aliens/random",
    summary = "Get a random alien",
    responses((status = 200, description = "A uniformly random alien", body = Alien))
)]
pub async fn random_alien(State(service): State<QueryService>) -> Json<Alien> {
    Json(service.random().clone())
}

#[utoipa::path(
    get,
    path = "/species",
    summary = "List all available species",
    responses((status = 200, description = "Species names in catalog order", body = Vec<String>))
)]
pub async fn list_species(State(service): State<QueryService>) -> Json<Vec<String>> {
    Json(service.species())
}

#[utoipa::path(
    get,
    path = "/habitats",
    summary = "List all available habitats",
    responses((status = 200, description = "Distinct habitats, unordered", body = Vec<String>))
)]
pub async fn list_habitats(State(service): State<QueryService>) -> Json<Vec<String>> {
    Json(service.habitats())
}

#[utoipa::path(
    get,
    path = "/sizes",
    summary = "List all available sizes",
    responses((status = 200, description = "Distinct sizes, unordered", body = Vec<String>))
)]
pub async fn list_sizes(State(service): State<QueryService>) -> Json<Vec<String>> {
    Json(service.sizes())
}

#[utoipa::path(
    get,
    path = "/aliens/species/{species_name}",
    summary = "Get alien by species name",
    params(("species_name" = String, Path, description = "Species name, any case")),
    responses(
        (status = 200, description = "The matching alien", body = Alien),
        (status = 404, description = "Alien species not found", body = ErrorBody)
    )
)]
pub async fn alien_by_species(
    State(service): State<QueryService>,
    species_name: Result<Path<String>, PathRejection>,
) -> Result<Json<Alien>, ApiError> {
    // A segment that does not decode cannot name any species.
    let Path(species_name) = species_name.map_err(|e| {
        debug!(error = %e, "undecodable species name");
        CoreError::SpeciesNotFound
    })?;
    let alien = service.by_species(&species_name)?;
    Ok(Json(alien.clone()))
}

#[utoipa::path(
    get,
    path = "/aliens",
    summary = "Get aliens by optional filters",
    params(
        ("habitat" = Option<String>, Query, description = "Habitat, any case"),
        ("size" = Option<String>, Query, description = "Size, any case")
    ),
    responses((status = 200, description = "Matching aliens in catalog order", body = Vec<Alien>))
)]
pub async fn list_aliens(
    State(service): State<QueryService>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Alien>> {
    let filter = AlienFilter::from_pairs(pairs);
    let aliens = service.filtered(&filter);
    debug!(
        habitat = filter.habitat(),
        size = filter.size(),
        matched = aliens.len(),
        "filtered aliens"
    );
    Json(aliens)
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
