use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::StockView;
use crate::service::validation::is_valid_price;
use crate::service::StockError;

use super::extractors::{MergeParams, QueryOrForm};
use super::handlers::AppState;

const MSG_NEGATIVE_PRICE: &str = "The price cannot be lower than 0.00";
const MSG_BLANK_NAME: &str = "name must not be blank";

/// Query or form parameters for a price update
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdatePriceParams {
    /// New price, must not be negative
    #[param(value_type = Option<f64>, example = 10.5)]
    pub price: Option<Decimal>,
}

/// Query or form parameters for stock creation
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateStockParams {
    /// Stock name, must not be blank
    #[param(example = "ACME Corp")]
    pub name: Option<String>,
    /// Initial price, must not be negative
    #[param(value_type = Option<f64>, example = 10.5)]
    pub price: Option<Decimal>,
}

impl MergeParams for UpdatePriceParams {
    fn merge(self, other: Self) -> Self {
        Self {
            price: self.price.or(other.price),
        }
    }
}

impl MergeParams for CreateStockParams {
    fn merge(self, other: Self) -> Self {
        Self {
            name: self.name.or(other.name),
            price: self.price.or(other.price),
        }
    }
}

/// Reject negative prices at the HTTP boundary
///
/// A missing price is let through; the service reports it.
fn check_price_param(price: Option<Decimal>) -> Result<(), StockError> {
    match price {
        Some(p) if !is_valid_price(p) => {
            Err(StockError::ConstraintViolation(MSG_NEGATIVE_PRICE.to_string()))
        }
        _ => Ok(()),
    }
}

/// Reject blank or whitespace-only names at the HTTP boundary
fn check_name_param(name: Option<&str>) -> Result<(), StockError> {
    match name {
        Some(n) if n.trim().is_empty() => {
            Err(StockError::ConstraintViolation(MSG_BLANK_NAME.to_string()))
        }
        _ => Ok(()),
    }
}

/// List all available stocks
#[utoipa::path(
    get,
    path = "/stocks",
    tag = "Stocks",
    responses(
        (status = 200, description = "List of all stocks", body = Vec<StockView>),
        (status = 500, description = "Internal server error", body = super::responses::ErrorResponse)
    )
)]
pub async fn list_stocks(
    State(service): State<AppState>,
) -> Result<Json<Vec<StockView>>, StockError> {
    service.list_stocks().await.map(Json)
}

/// Find a stock by id
#[utoipa::path(
    get,
    path = "/stocks/{stockId}",
    tag = "Stocks",
    params(
        ("stockId" = i64, Path, description = "Stock ID")
    ),
    responses(
        (status = 200, description = "Stock details", body = StockView),
        (status = 404, description = "Stock not found", body = super::responses::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::responses::ErrorResponse)
    )
)]
pub async fn get_stock(
    State(service): State<AppState>,
    Path(stock_id): Path<i64>,
) -> Result<Json<StockView>, StockError> {
    service.get_stock(Some(stock_id)).await.map(Json)
}

/// Update the price of a stock
#[utoipa::path(
    put,
    path = "/stocks/{stockId}",
    tag = "Stocks",
    params(
        ("stockId" = i64, Path, description = "Stock ID"),
        UpdatePriceParams
    ),
    responses(
        (status = 200, description = "Updated stock", body = StockView),
        (status = 400, description = "Missing or negative price", body = super::responses::ErrorResponse),
        (status = 404, description = "Stock not found", body = super::responses::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::responses::ErrorResponse)
    )
)]
pub async fn update_stock_price(
    State(service): State<AppState>,
    Path(stock_id): Path<i64>,
    QueryOrForm(params): QueryOrForm<UpdatePriceParams>,
) -> Result<Json<StockView>, StockError> {
    let price = params.price.ok_or_else(|| StockError::null_field("price"))?;
    check_price_param(Some(price))?;

    service
        .update_stock_price(Some(stock_id), Some(price))
        .await
        .map(Json)
}

/// Create a new stock entry
#[utoipa::path(
    post,
    path = "/stocks",
    tag = "Stocks",
    params(CreateStockParams),
    responses(
        (status = 200, description = "Created stock", body = StockView),
        (status = 400, description = "Invalid input", body = super::responses::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::responses::ErrorResponse)
    )
)]
pub async fn create_stock(
    State(service): State<AppState>,
    QueryOrForm(params): QueryOrForm<CreateStockParams>,
) -> Result<Json<StockView>, StockError> {
    check_name_param(params.name.as_deref())?;
    check_price_param(params.price)?;

    service
        .create_stock(params.name, params.price)
        .await
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_check_price_param() {
        assert!(check_price_param(Some(dec!(0))).is_ok());
        assert!(check_price_param(Some(dec!(10.5))).is_ok());
        assert!(check_price_param(None).is_ok());

        let err = check_price_param(Some(dec!(-0.01))).unwrap_err();
        assert_eq!(err.to_string(), "The price cannot be lower than 0.00");
    }

    #[test]
    fn test_params_merge_prefers_first() {
        let merged = CreateStockParams {
            name: Some("query".to_string()),
            price: None,
        }
        .merge(CreateStockParams {
            name: Some("form".to_string()),
            price: Some(dec!(2)),
        });

        assert_eq!(merged.name.as_deref(), Some("query"));
        assert_eq!(merged.price, Some(dec!(2)));
    }

    #[test]
    fn test_check_name_param() {
        assert!(check_name_param(Some("ACME")).is_ok());
        assert!(check_name_param(None).is_ok());
        assert!(check_name_param(Some("")).is_err());
        assert!(check_name_param(Some("   ")).is_err());
    }
}
