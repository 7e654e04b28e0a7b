//! Storage layer for the portfolio backend.
//!
//! The [`RecordStore`] trait is the boundary between request handling and
//! persistence. Production uses SQLite through SQLx; tests can swap in an
//! in-memory store.

#[cfg(test)]
mod memory;
mod models;
mod repository;

use async_trait::async_trait;

use crate::domain::{Certification, Project};
use crate::error::PortfolioResult;

#[cfg(test)]
pub use memory::MemoryRecordStore;
pub use repository::SqliteRecordStore;

/// Durable storage for the two record collections.
///
/// Listing returns records in the store's natural order, which is
/// insertion order. Ids are not required to be unique.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Number of stored projects.
    async fn count_projects(&self) -> PortfolioResult<u64>;

    /// Number of stored certifications.
    async fn count_certifications(&self) -> PortfolioResult<u64>;

    /// Insert projects in one bulk write.
    async fn insert_projects(&self, projects: &[Project]) -> PortfolioResult<()>;

    /// Insert certifications in one bulk write.
    async fn insert_certifications(&self, certifications: &[Certification])
        -> PortfolioResult<()>;

    /// All stored projects.
    async fn list_projects(&self) -> PortfolioResult<Vec<Project>>;

    /// All stored certifications.
    async fn list_certifications(&self) -> PortfolioResult<Vec<Certification>>;
}
