pub mod stock;

pub use stock::{NewStockRecord, StockRecord};
