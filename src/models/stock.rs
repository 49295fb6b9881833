use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stock entity - a tradable instrument with its current price
///
/// `id` stays `None` until the record has been saved; the store assigns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    /// Surrogate identifier assigned by the store
    pub id: Option<i64>,

    /// Human-readable stock name
    pub name: String,

    /// Current price (exact decimal)
    pub current_price: Decimal,

    /// Timestamp of the last price mutation
    pub last_update: DateTime<Utc>,
}

impl Stock {
    /// Create an unsaved stock stamped with the current time
    pub fn new(name: String, current_price: Decimal) -> Self {
        Self {
            id: None,
            name,
            current_price,
            last_update: Utc::now(),
        }
    }

    /// Set the identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the last update timestamp
    pub fn with_last_update(mut self, last_update: DateTime<Utc>) -> Self {
        self.last_update = last_update;
        self
    }

    /// Replace the price and refresh `last_update`
    pub fn reprice(&mut self, price: Decimal) {
        self.current_price = price;
        self.last_update = Utc::now();
    }
}

/// Public representation of a stock (no timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockView {
    #[schema(example = 1)]
    pub id: Option<i64>,

    #[schema(example = "ACME Corp")]
    pub name: String,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 150.50)]
    pub current_price: Decimal,
}
