use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::database::connection::DatabaseError;
use crate::models::Stock;

use super::StockRepository;

/// In-memory stock store
///
/// Used when no database is configured. Rows are keyed by id, so `find_all`
/// returns them in id order just like the PostgreSQL repository.
pub struct InMemoryStockRepository {
    stocks: RwLock<BTreeMap<i64, Stock>>,
    next_id: AtomicI64,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self {
            stocks: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStockRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn find_all(&self) -> Result<Vec<Stock>, DatabaseError> {
        Ok(self.stocks.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Stock>, DatabaseError> {
        Ok(self.stocks.read().get(&id).cloned())
    }

    async fn save(&self, mut stock: Stock) -> Result<Stock, DatabaseError> {
        let id = match stock.id {
            Some(id) => {
                // Keep the sequence ahead of explicitly supplied ids
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        stock.id = Some(id);

        self.stocks.write().insert(id, stock.clone());

        Ok(stock)
    }
}
