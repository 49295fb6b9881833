use utoipa::OpenApi;

use crate::api::responses::*;
use crate::api::{handlers, stock_handlers};
use crate::models::StockView;

/// OpenAPI document for the stock endpoints
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock API",
        version = "1.0.0",
        description = "Application for managing stocks",
        license(
            name = "MIT"
        )
    ),
    paths(
        handlers::health_check,
        stock_handlers::list_stocks,
        stock_handlers::get_stock,
        stock_handlers::update_stock_price,
        stock_handlers::create_stock,
    ),
    components(
        schemas(
            StockView,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Stocks", description = "Stock management endpoints"),
    )
)]
pub struct ApiDoc;
