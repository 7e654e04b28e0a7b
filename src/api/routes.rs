//! Route definitions for the API.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::config::AssetsConfig;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_projects, handlers::list_certifications),
    components(schemas(
        crate::domain::Project,
        crate::domain::Certification,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "portfolio", description = "Portfolio content")
    ),
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "Read-only access to portfolio projects and certifications",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the router.
///
/// API routes are registered before the frontend fallback, so a file in
/// the bundle can never shadow them. Each API path also answers with a
/// trailing slash. Matching is case-sensitive. Any path that matches
/// neither a route nor a file gets the bundle's entry file with status 200.
pub fn build_router(state: AppState, assets: &AssetsConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend = ServeDir::new(&assets.dir).fallback(ServeFile::new(assets.index_path()));

    Router::new()
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/projects/", get(handlers::list_projects))
        .route("/api/certifications", get(handlers::list_certifications))
        .route("/api/certifications/", get(handlers::list_certifications))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Frontend bundle, last
        .fallback_service(frontend)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
