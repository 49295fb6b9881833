use crate::database::connection::{run_blocking, DatabaseError, PgPooledConnection};
use crate::database::models::{NewStockRecord, StockRecord};
use crate::database::schema::stocks;
use crate::models::Stock;
use diesel::prelude::*;
use diesel::upsert::excluded;
use std::sync::Arc;

/// Stock repository trait - defines the store contract used by the stock service
#[async_trait::async_trait]
pub trait StockRepository: Send + Sync {
    /// Get all stocks, ordered by id
    async fn find_all(&self) -> Result<Vec<Stock>, DatabaseError>;

    /// Find stock by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Stock>, DatabaseError>;

    /// Insert or update a stock
    ///
    /// A stock without an id is inserted and receives a fresh one. A stock
    /// carrying an id overwrites the row with that id instead of duplicating it.
    async fn save(&self, stock: Stock) -> Result<Stock, DatabaseError>;
}

type ConnectionProvider = Arc<dyn Fn() -> Result<PgPooledConnection, DatabaseError> + Send + Sync>;

/// PostgreSQL implementation of StockRepository
///
/// Diesel is synchronous, so every call is moved onto the blocking pool.
pub struct StockRepositoryImpl {
    get_conn: ConnectionProvider,
}

impl StockRepositoryImpl {
    /// Create new stock repository with connection provider
    pub fn new<F>(get_conn: F) -> Self
    where
        F: Fn() -> Result<PgPooledConnection, DatabaseError> + Send + Sync + 'static,
    {
        Self {
            get_conn: Arc::new(get_conn),
        }
    }
}

#[async_trait::async_trait]
impl StockRepository for StockRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Stock>, DatabaseError> {
        let get_conn = Arc::clone(&self.get_conn);

        run_blocking(move || {
            let mut conn = get_conn()?;

            let records = stocks::table
                .order(stocks::id.asc())
                .load::<StockRecord>(&mut conn)?;

            Ok(records.into_iter().map(Stock::from).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Stock>, DatabaseError> {
        let get_conn = Arc::clone(&self.get_conn);

        run_blocking(move || {
            let mut conn = get_conn()?;

            let record = stocks::table
                .filter(stocks::id.eq(id))
                .first::<StockRecord>(&mut conn)
                .optional()?;

            Ok(record.map(Stock::from))
        })
        .await
    }

    async fn save(&self, stock: Stock) -> Result<Stock, DatabaseError> {
        let get_conn = Arc::clone(&self.get_conn);

        run_blocking(move || {
            let mut conn = get_conn()?;
            let new_record = NewStockRecord::from(stock);

            let saved = match new_record.id {
                Some(_) => diesel::insert_into(stocks::table)
                    .values(&new_record)
                    .on_conflict(stocks::id)
                    .do_update()
                    .set((
                        stocks::name.eq(excluded(stocks::name)),
                        stocks::current_price.eq(excluded(stocks::current_price)),
                        stocks::last_update.eq(excluded(stocks::last_update)),
                    ))
                    .get_result::<StockRecord>(&mut conn)?,
                None => diesel::insert_into(stocks::table)
                    .values(&new_record)
                    .get_result::<StockRecord>(&mut conn)?,
            };

            tracing::debug!("Saved stock {} ({})", saved.id, saved.name);

            Ok(Stock::from(saved))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{establish_connection_pool, run_migrations};
    use rust_decimal_macros::dec;

    fn live_repository() -> Option<StockRepositoryImpl> {
        let database_url = std::env::var("DATABASE_URL").ok()?;
        let pool = establish_connection_pool(&database_url, 2).ok()?;
        run_migrations(&pool).ok()?;

        Some(StockRepositoryImpl::new(move || pool.get_conn()))
    }

    // Requires a live PostgreSQL; skipped when DATABASE_URL is unset
    #[tokio::test]
    async fn test_save_inserts_then_updates_in_place() {
        let Some(repository) = live_repository() else {
            return;
        };

        let created = repository
            .save(Stock::new("repository test".to_string(), dec!(10.25)))
            .await
            .unwrap();
        let id = created.id.expect("store assigns an id");

        let mut changed = created.clone();
        changed.reprice(dec!(11.50));
        let updated = repository.save(changed).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.current_price, dec!(11.50));

        let found = repository.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.current_price, dec!(11.50));

        let matching = repository
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter(|s| s.id == Some(id))
            .count();
        assert_eq!(matching, 1);
    }
}
