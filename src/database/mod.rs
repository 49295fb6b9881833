/// Database module for PostgreSQL integration
///
/// This module provides:
/// - Connection pooling for PostgreSQL
/// - Embedded Diesel migrations
/// - Repository pattern implementations (PostgreSQL and in-memory)
/// - Database models and schema

pub mod bootstrap;
pub mod connection;
pub mod models;
pub mod repositories;
pub mod schema;

pub use bootstrap::{initialize_stock_repository, repository_for_pool};
pub use connection::{establish_connection_pool, run_migrations, DatabaseError, DatabasePool};
