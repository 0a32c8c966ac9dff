use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One end-of-day bhavcopy row for an allowlisted security. Stored in
/// `bse_stocks` (latest, keyed on trade date + symbol) and `stocks_portfolio`
/// (history).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PriceSnapshot {
    pub trade_date: NaiveDate,
    pub symbol: String,
    pub name: String,
    pub open: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub close: BigDecimal,
    pub volume: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LatestClose {
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub close: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct StockSymbol {
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSummary {
    pub message: String,
    pub rows: usize,
    pub trade_date: String,
}
