use crate::config::AppConfig;
use crate::storage::{Storage, StorageClient};
use crate::store::{postgres::PgStore, DiningStore};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DiningStore>,
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn StorageClient>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        let storage = Arc::new(Storage::new(&config.storage).await?) as Arc<dyn StorageClient>;
        let store = Arc::new(PgStore::new(db)) as Arc<dyn DiningStore>;

        Ok(Self::from_parts(store, config, storage))
    }

    pub fn from_parts(
        store: Arc<dyn DiningStore>,
        config: Arc<AppConfig>,
        storage: Arc<dyn StorageClient>,
    ) -> Self {
        Self {
            store,
            config,
            storage,
        }
    }
}

#[cfg(test)]
pub use fake::FakeStorage;
