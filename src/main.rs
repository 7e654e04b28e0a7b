//! Portfolio Server - backend for a personal portfolio site
//!
//! Serves portfolio projects and certifications as JSON and hosts the
//! prebuilt frontend bundle with client-side routing fallback.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod error;
mod logging;
mod seed;
mod storage;

use crate::api::build_router;
use crate::config::Config;
use crate::error::PortfolioResult;
use crate::seed::SeedReport;
use crate::storage::{RecordStore, SqliteRecordStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store for projects and certifications.
    pub store: Arc<dyn RecordStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting Portfolio Server v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.url,
        assets = %config.assets.dir.display(),
        "Configuration loaded"
    );

    // Connections open on first use, so an unreachable database does not
    // keep the listener from starting.
    let store = SqliteRecordStore::connect_lazy(&config.database.url).map_err(|e| {
        tracing::error!(error = %e, "Invalid database URL");
        anyhow::anyhow!("Database configuration error: {}", e)
    })?;

    match prepare_store(&store).await {
        Ok(report) => tracing::info!(
            projects_inserted = report.projects_inserted,
            certifications_inserted = report.certifications_inserted,
            "Database ready"
        ),
        Err(e) => tracing::error!(
            error = %e,
            "Failed to prepare database; serving anyway"
        ),
    }

    let state = AppState {
        store: Arc::new(store),
    };

    let app = build_router(state, &config.assets);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the schema and seed empty collections.
///
/// The caller logs the outcome and keeps starting either way; store-backed
/// requests will then report the error themselves.
async fn prepare_store(store: &SqliteRecordStore) -> PortfolioResult<SeedReport> {
    store.init_schema().await?;
    seed::seed_defaults(store).await
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AssetsConfig;
    use crate::error::PortfolioError;

    async fn memory_store() -> SqliteRecordStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteRecordStore::new(pool)
    }

    #[tokio::test]
    async fn test_prepare_store_seeds_fresh_database() {
        let store = memory_store().await;

        let report = prepare_store(&store).await.unwrap();
        assert_eq!(report.projects_inserted, 4);
        assert_eq!(report.certifications_inserted, 2);

        let again = prepare_store(&store).await.unwrap();
        assert_eq!(again, SeedReport::default());
    }

    #[tokio::test]
    async fn test_failed_preparation_still_serves() {
        let store = memory_store().await;
        store.pool().close().await;

        let outcome = prepare_store(&store).await;
        assert!(matches!(outcome, Err(PortfolioError::Database(_))));

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>entry</html>").unwrap();
        let assets = AssetsConfig {
            dir: dir.path().to_path_buf(),
            index: "index.html".to_string(),
        };
        let router = build_router(
            AppState {
                store: Arc::new(store),
            },
            &assets,
        );

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/projects")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
