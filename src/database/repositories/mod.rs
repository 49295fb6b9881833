/// Repository pattern implementations
///
/// Services depend on the `StockRepository` trait, never on a concrete store,
/// so PostgreSQL and the in-memory store are interchangeable.

pub mod in_memory_stock_repository;
pub mod stock_repository;

pub use in_memory_stock_repository::InMemoryStockRepository;
pub use stock_repository::{StockRepository, StockRepositoryImpl};
