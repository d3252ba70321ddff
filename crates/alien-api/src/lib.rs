//! Alien Species API
//!
//! Read-only HTTP/JSON endpoints over a [`QueryService`]:
//!
//! | Route | Response |
//! |---|---|
//! | `GET /aliens/random` | one record |
//! | `GET /species` | species names in catalog order |
//! | `GET /habitats` | distinct habitats |
//! | `GET /sizes` | distinct sizes |
//! | `GET /aliens/species/{species_name}` | one record, or 404 |
//! | `GET /aliens?habitat=&size=` | matching records |
//! | `GET /openapi.json` | OpenAPI 3.1 document for the routes above |
//!
//! Name and filter matching ignores case. Errors are `{"detail": "..."}`.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{Cli, ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ErrorBody};

use std::sync::LazyLock;

use alien_core::{Alien, QueryService};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Service title, reported at startup and in the OpenAPI document.
pub const TITLE: &str = "Alien Species API";

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::random_alien,
        routes::list_species,
        routes::list_habitats,
        routes::list_sizes,
        routes::alien_by_species,
        routes::list_aliens,
    ),
    components(schemas(Alien, ErrorBody))
)]
struct ApiDoc;

static OPENAPI: LazyLock<utoipa::openapi::OpenApi> = LazyLock::new(|| {
    let mut doc = ApiDoc::openapi();
    doc.info.title = TITLE.to_string();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
});

/// The OpenAPI document describing every route.
pub fn openapi() -> &'static utoipa::openapi::OpenApi {
    &OPENAPI
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi().clone())
}

/// Build the application router over `service`.
pub fn router(service: QueryService) -> Router {
    Router::new()
        .route("/aliens/random", get(routes::random_alien))
        .route("/species", get(routes::list_species))
        .route("/habitats", get(routes::list_habitats))
        .route("/sizes", get(routes::list_sizes))
        .route(
            "/aliens/species/{species_name}",
            get(routes::alien_by_species),
        )
        .route("/aliens", get(routes::list_aliens))
        .route("/openapi.json", get(openapi_json))
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(service)
}

/// Any origin, method and header; credentials stay disabled.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
