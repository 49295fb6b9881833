use rust_decimal::Decimal;
use std::sync::Arc;

use crate::database::repositories::StockRepository;
use crate::models::{Stock, StockView};

use super::errors::StockError;
use super::mapper::to_view;
use super::validation::validate_new_stock;

const STOCK_ID_FIELD: &str = "Stock id";
const NAME_FIELD: &str = "name";
const PRICE_FIELD: &str = "currentPrice";

/// Stock service - applies validation and existence checks on top of the store
///
/// Holds no state besides the repository; every call is an independent
/// read/validate/write unit.
pub struct StockService {
    repository: Arc<dyn StockRepository>,
}

impl StockService {
    pub fn new(repository: Arc<dyn StockRepository>) -> Self {
        Self { repository }
    }

    /// List every stock in store order
    pub async fn list_stocks(&self) -> Result<Vec<StockView>, StockError> {
        let stocks = self.repository.find_all().await?;

        tracing::debug!("Listing {} stocks", stocks.len());

        Ok(stocks.iter().map(StockView::from).collect())
    }

    /// Fetch a single stock
    pub async fn get_stock(&self, id: Option<i64>) -> Result<StockView, StockError> {
        let id = id.ok_or_else(|| StockError::null_field(STOCK_ID_FIELD))?;

        let stock = self.repository.find_by_id(id).await?;

        to_view(stock.as_ref()).ok_or_else(|| {
            tracing::debug!("Stock {} not found", id);
            StockError::NotFound
        })
    }

    /// Replace the price of an existing stock
    ///
    /// The new price is stored as given; sign is only checked on creation.
    pub async fn update_stock_price(
        &self,
        id: Option<i64>,
        price: Option<Decimal>,
    ) -> Result<StockView, StockError> {
        let id = id.ok_or_else(|| StockError::null_field(STOCK_ID_FIELD))?;

        let mut stock = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(StockError::NotFound)?;

        let price = price.ok_or_else(|| StockError::null_field(PRICE_FIELD))?;

        let previous = stock.current_price;
        stock.reprice(price);
        let saved = self.repository.save(stock).await?;

        tracing::info!("Stock {} repriced {} -> {}", id, previous, price);

        Ok(StockView::from(&saved))
    }

    /// Create a new stock
    pub async fn create_stock(
        &self,
        name: Option<String>,
        price: Option<Decimal>,
    ) -> Result<StockView, StockError> {
        let name = name.ok_or_else(|| StockError::null_field(NAME_FIELD))?;
        let price = price.ok_or_else(|| StockError::null_field(PRICE_FIELD))?;

        let candidate = Stock::new(name, price);

        if let Err(e) = validate_new_stock(&candidate) {
            tracing::warn!(
                "Rejected stock '{}' with price {}",
                candidate.name,
                candidate.current_price
            );
            return Err(e);
        }

        let saved = self.repository.save(candidate).await?;

        tracing::info!(
            "Created stock {:?} '{}' at {}",
            saved.id,
            saved.name,
            saved.current_price
        );

        Ok(StockView::from(&saved))
    }
}
