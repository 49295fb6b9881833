use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::models::Stock;

/// Row of the `stocks` table
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::database::schema::stocks)]
#[diesel(primary_key(id))]
pub struct StockRecord {
    /// Auto-incrementing ID
    pub id: i64,

    pub name: String,

    pub current_price: Decimal,

    /// Timestamp of the last price mutation
    pub last_update: DateTime<Utc>,
}

/// Row for insertion or upsert
///
/// A `None` id lets PostgreSQL assign one from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::database::schema::stocks)]
pub struct NewStockRecord {
    pub id: Option<i64>,
    pub name: String,
    pub current_price: Decimal,
    pub last_update: DateTime<Utc>,
}

impl From<StockRecord> for Stock {
    fn from(record: StockRecord) -> Self {
        Self {
            id: Some(record.id),
            name: record.name,
            current_price: record.current_price,
            last_update: record.last_update,
        }
    }
}

impl From<Stock> for NewStockRecord {
    fn from(stock: Stock) -> Self {
        Self {
            id: stock.id,
            name: stock.name,
            current_price: stock.current_price,
            last_update: stock.last_update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_into_stock() {
        let now = Utc::now();
        let record = StockRecord {
            id: 42,
            name: "ACME".to_string(),
            current_price: dec!(99.95),
            last_update: now,
        };

        let stock = Stock::from(record);
        assert_eq!(stock.id, Some(42));
        assert_eq!(stock.name, "ACME");
        assert_eq!(stock.current_price, dec!(99.95));
        assert_eq!(stock.last_update, now);
    }

    #[test]
    fn test_unsaved_stock_into_new_record() {
        let record = NewStockRecord::from(Stock::new("ACME".to_string(), dec!(1)));

        assert_eq!(record.id, None);
        assert_eq!(record.name, "ACME");
        assert_eq!(record.current_price, dec!(1));
    }
}
