//! HTTP request handlers.

use axum::{extract::State, Json};

use crate::domain::{Certification, Project};
use crate::error::PortfolioResult;
use crate::AppState;

/// List every stored project.
///
/// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All projects in store order", body = [Project]),
        (status = 500, description = "Store error", body = crate::error::ErrorResponse)
    ),
    tag = "portfolio"
)]
pub async fn list_projects(
    State(state): State<AppState>,
) -> PortfolioResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects().await?;
    tracing::debug!(count = projects.len(), "Listed projects");

    Ok(Json(projects))
}

/// List every stored certification.
///
/// GET /api/certifications
#[utoipa::path(
    get,
    path = "/api/certifications",
    responses(
        (status = 200, description = "All certifications in store order", body = [Certification]),
        (status = 500, description = "Store error", body = crate::error::ErrorResponse)
    ),
    tag = "portfolio"
)]
pub async fn list_certifications(
    State(state): State<AppState>,
) -> PortfolioResult<Json<Vec<Certification>>> {
    let certifications = state.store.list_certifications().await?;
    tracing::debug!(count = certifications.len(), "Listed certifications");

    Ok(Json(certifications))
}
