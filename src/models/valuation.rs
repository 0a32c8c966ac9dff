use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub holding_id: Uuid,
    pub stock_symbol: String,
    pub quantity: BigDecimal,
    pub purchase_price: BigDecimal,
    pub current_price: BigDecimal,
    /// `None` when no snapshot exists and the purchase price was used.
    pub price_date: Option<NaiveDate>,
    pub invested_value: BigDecimal,
    pub market_value: BigDecimal,
    pub gain: BigDecimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub portfolio_id: Uuid,
    pub holdings: Vec<HoldingValuation>,
    pub invested_value: BigDecimal,
    pub market_value: BigDecimal,
    pub gain: BigDecimal,
    pub gain_percent: BigDecimal,
}
