use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;
use crate::locations::LocationRegistry;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    /// Read-only location cache, loaded once at startup. The only in-process
    /// state shared between requests.
    pub locations: Arc<LocationRegistry>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("run migrations")?;

        let locations = Arc::new(
            LocationRegistry::load(&db)
                .await
                .context("load location registry")?,
        );

        Ok(Self {
            db,
            config,
            locations,
        })
    }

    pub fn from_parts(db: PgPool, config: Arc<AppConfig>, locations: Arc<LocationRegistry>) -> Self {
        Self {
            db,
            config,
            locations,
        }
    }
}
