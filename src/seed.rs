//! Startup seeding of empty collections.

use crate::domain::{Certification, Project};
use crate::error::PortfolioResult;
use crate::storage::RecordStore;

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub projects_inserted: usize,
    pub certifications_inserted: usize,
}

/// Insert the default records into every collection that is empty.
///
/// Collections that already hold records are left untouched. Not guarded
/// against concurrent processes seeding the same store.
pub async fn seed_defaults(store: &dyn RecordStore) -> PortfolioResult<SeedReport> {
    let mut report = SeedReport::default();

    if store.count_projects().await? == 0 {
        let projects = Project::defaults();
        store.insert_projects(&projects).await?;
        report.projects_inserted = projects.len();
        tracing::info!(count = projects.len(), "Project data seeded");
    }

    if store.count_certifications().await? == 0 {
        let certifications = Certification::defaults();
        store.insert_certifications(&certifications).await?;
        report.certifications_inserted = certifications.len();
        tracing::info!(count = certifications.len(), "Certification data seeded");
    }

    Ok(report)
}
