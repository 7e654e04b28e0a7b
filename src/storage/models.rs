//! Database models for the portfolio backend.
//!
//! These are the row types returned by SQLx queries.

use sqlx::FromRow;

use crate::domain::{Certification, Project};
use crate::error::PortfolioError;

/// Database row for the projects table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: String,
    pub kind: String,
    pub category: String,
    pub title: String,
    pub summary: String,
    pub client: String,
    pub project_date: String,
    pub github_link: String,
    /// JSON array of image URLs.
    pub images: String,
    pub description: String,
}

impl TryFrom<ProjectRow> for Project {
    type Error = PortfolioError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: row.id,
            kind: row.kind,
            category: row.category,
            title: row.title,
            summary: row.summary,
            client: row.client,
            project_date: row.project_date,
            github_link: row.github_link,
            images: serde_json::from_str(&row.images)?,
            description: row.description,
        })
    }
}

/// Database row for the certifications table.
#[derive(Debug, Clone, FromRow)]
pub struct CertificationRow {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub verify_link: String,
    pub image: String,
    pub description: String,
}

impl From<CertificationRow> for Certification {
    fn from(row: CertificationRow) -> Self {
        Certification {
            id: row.id,
            title: row.title,
            issuer: row.issuer,
            date: row.date,
            verify_link: row.verify_link,
            image: row.image,
            description: row.description,
        }
    }
}
