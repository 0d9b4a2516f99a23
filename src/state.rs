use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{self, SqlitePool};
use crate::error::AppError;

/// Shared handles passed explicitly into every component; there is no
/// process-wide connection.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> Result<Self, AppError> {
        let config = Arc::new(AppConfig::from_env());
        let db = db::connect(&config.database_url).await?;
        Ok(Self { db, config })
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }

    /// State backed by an in-memory database, for tests.
    pub async fn in_memory() -> Result<Self, AppError> {
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
        });
        let db = db::connect(&config.database_url).await?;
        Ok(Self { db, config })
    }
}
