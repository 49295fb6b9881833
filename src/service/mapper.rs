use crate::models::{Stock, StockView};

impl From<&Stock> for StockView {
    fn from(stock: &Stock) -> Self {
        Self {
            id: stock.id,
            name: stock.name.clone(),
            current_price: stock.current_price,
        }
    }
}

/// Project a stock onto its public view; `None` maps to `None`
pub fn to_view(stock: Option<&Stock>) -> Option<StockView> {
    stock.map(StockView::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_view() {
        let stock = Stock::new("test stock".to_string(), dec!(10)).with_id(123);

        let view = to_view(Some(&stock)).unwrap();
        assert_eq!(view.id, Some(123));
        assert_eq!(view.name, "test stock");
        assert_eq!(view.current_price, dec!(10));
    }

    #[test]
    fn test_to_view_none() {
        assert_eq!(to_view(None), None);
    }
}
