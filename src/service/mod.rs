pub mod errors;
pub mod mapper;
pub mod stock_service;
pub mod validation;

pub use errors::StockError;
pub use mapper::to_view;
pub use stock_service::StockService;
