//! In-memory record store for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Certification, Project};
use crate::error::{PortfolioError, PortfolioResult};
use crate::storage::RecordStore;

/// Vec-backed store. When `unavailable`, every call fails the way a
/// closed database pool does.
#[derive(Default)]
pub struct MemoryRecordStore {
    projects: RwLock<Vec<Project>>,
    certifications: RwLock<Vec<Certification>>,
    unavailable: bool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> PortfolioResult<()> {
        if self.unavailable {
            return Err(PortfolioError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn count_projects(&self) -> PortfolioResult<u64> {
        self.check()?;
        Ok(self.projects.read().await.len() as u64)
    }

    async fn count_certifications(&self) -> PortfolioResult<u64> {
        self.check()?;
        Ok(self.certifications.read().await.len() as u64)
    }

    async fn insert_projects(&self, projects: &[Project]) -> PortfolioResult<()> {
        self.check()?;
        self.projects.write().await.extend_from_slice(projects);
        Ok(())
    }

    async fn insert_certifications(
        &self,
        certifications: &[Certification],
    ) -> PortfolioResult<()> {
        self.check()?;
        self.certifications
            .write()
            .await
            .extend_from_slice(certifications);
        Ok(())
    }

    async fn list_projects(&self) -> PortfolioResult<Vec<Project>> {
        self.check()?;
        Ok(self.projects.read().await.clone())
    }

    async fn list_certifications(&self) -> PortfolioResult<Vec<Certification>> {
        self.check()?;
        Ok(self.certifications.read().await.clone())
    }
}
