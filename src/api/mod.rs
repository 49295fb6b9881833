pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod responses;
pub mod routes;
pub mod stock_handlers;

pub use extractors::{MergeParams, QueryOrForm};
pub use handlers::*;
pub use openapi::*;
pub use responses::*;
pub use routes::create_router;
pub use stock_handlers::*;
