use std::sync::Arc;

use crate::config::AppConfig;

use super::connection::{establish_connection_pool, run_migrations, DatabasePool};
use super::repositories::{InMemoryStockRepository, StockRepository, StockRepositoryImpl};

/// Pick the stock store: PostgreSQL when DATABASE_URL is set and reachable,
/// otherwise the in-memory store
pub fn initialize_stock_repository(config: &AppConfig) -> Arc<dyn StockRepository> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("⚠️  DATABASE_URL not set, stocks are kept in memory");
        return Arc::new(InMemoryStockRepository::new());
    };

    tracing::info!("🗄️  Initializing PostgreSQL connection...");

    match establish_connection_pool(database_url, config.pool_max_size) {
        Ok(pool) => repository_for_pool(pool, config.run_migrations),
        Err(e) => {
            tracing::error!("❌ Failed to establish database connection: {}", e);
            tracing::warn!("⚠️  Server will start with an in-memory store");
            Arc::new(InMemoryStockRepository::new())
        }
    }
}

/// Wrap a pool in the PostgreSQL repository, applying pending migrations first
///
/// The schema cannot be trusted after a failed migration, so the in-memory
/// store is returned instead.
pub fn repository_for_pool(pool: DatabasePool, run_pending: bool) -> Arc<dyn StockRepository> {
    if run_pending {
        match run_migrations(&pool) {
            Ok(count) => tracing::info!("✅ {} pending migration(s) applied", count),
            Err(e) => {
                tracing::error!("❌ Failed to run migrations: {}", e);
                tracing::warn!("⚠️  Server will start with an in-memory store");
                return Arc::new(InMemoryStockRepository::new());
            }
        }
    }

    tracing::info!("✅ Database integration complete");

    Arc::new(StockRepositoryImpl::new(move || pool.get_conn()))
}
