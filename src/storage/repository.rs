//! SQLite-backed record store.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::domain::{Certification, Project};
use crate::error::PortfolioResult;
use crate::storage::models::{CertificationRow, ProjectRow};
use crate::storage::RecordStore;

/// Record store over a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a store whose connections are opened on first use.
    ///
    /// Only a malformed URL fails here; an unreachable database surfaces
    /// as an error from the first query instead.
    pub fn connect_lazy(url: &str) -> PortfolioResult<Self> {
        let pool = SqlitePoolOptions::new().connect_lazy(url)?;
        Ok(Self::new(pool))
    }

    /// Get a reference to the underlying pool.
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the database schema.
    ///
    /// `id` is deliberately not a key: duplicate ids are stored as given.
    pub async fn init_schema(&self) -> PortfolioResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT NOT NULL,
                kind TEXT NOT NULL,
                category TEXT NOT NULL,
                title TEXT NOT NULL,
                summary TEXT NOT NULL,
                client TEXT NOT NULL,
                project_date TEXT NOT NULL,
                github_link TEXT NOT NULL,
                images TEXT NOT NULL,
                description TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS certifications (
                id TEXT NOT NULL,
                title TEXT NOT NULL,
                issuer TEXT NOT NULL,
                date TEXT NOT NULL,
                verify_link TEXT NOT NULL,
                image TEXT NOT NULL,
                description TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn count_projects(&self) -> PortfolioResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    async fn count_certifications(&self) -> PortfolioResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM certifications")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    async fn insert_projects(&self, projects: &[Project]) -> PortfolioResult<()> {
        let mut tx = self.pool.begin().await?;

        for project in projects {
            sqlx::query(
                r#"
                INSERT INTO projects (id, kind, category, title, summary, client, project_date, github_link, images, description)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&project.id)
            .bind(&project.kind)
            .bind(&project.category)
            .bind(&project.title)
            .bind(&project.summary)
            .bind(&project.client)
            .bind(&project.project_date)
            .bind(&project.github_link)
            .bind(serde_json::to_string(&project.images)?)
            .bind(&project.description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn insert_certifications(
        &self,
        certifications: &[Certification],
    ) -> PortfolioResult<()> {
        let mut tx = self.pool.begin().await?;

        for cert in certifications {
            sqlx::query(
                r#"
                INSERT INTO certifications (id, title, issuer, date, verify_link, image, description)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&cert.id)
            .bind(&cert.title)
            .bind(&cert.issuer)
            .bind(&cert.date)
            .bind(&cert.verify_link)
            .bind(&cert.image)
            .bind(&cert.description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list_projects(&self) -> PortfolioResult<Vec<Project>> {
        let rows: Vec<ProjectRow> = sqlx::query_as(
            r#"
            SELECT id, kind, category, title, summary, client, project_date, github_link, images, description
            FROM projects
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    async fn list_certifications(&self) -> PortfolioResult<Vec<Certification>> {
        let rows: Vec<CertificationRow> = sqlx::query_as(
            r#"
            SELECT id, title, issuer, date, verify_link, image, description
            FROM certifications
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Certification::from).collect())
    }
}
