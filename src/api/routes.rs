use axum::{routing::get, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::service::StockService;

use super::handlers::health_check;
use super::openapi::ApiDoc;
use super::stock_handlers::*;

/// Create the API router with Swagger UI
pub fn create_router(service: Arc<StockService>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        // Stock endpoints
        .route("/stocks", get(list_stocks).post(create_stock))
        .route("/stocks/:stock_id", get(get_stock).put(update_stock_price))
        .with_state(service)
}
