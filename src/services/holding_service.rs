use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateHolding, Holding, NewHolding, StockSymbol};
use crate::services::portfolio_service;

pub async fn list_for_portfolio(pool: &PgPool, portfolio_id: Option<Uuid>) -> Result<Vec<Holding>, AppError> {
    let portfolio_id = portfolio_id
        .ok_or_else(|| AppError::Validation("Missing portfolioId query parameter".into()))?;
    let holdings = db::holding_queries::fetch_for_portfolio(pool, portfolio_id).await?;
    Ok(holdings)
}

/// Checks presence and sign of every field. Zero quantity or price counts
/// as missing.
pub fn validate(input: CreateHolding) -> Result<NewHolding, AppError> {
    let zero = BigDecimal::from(0);
    let symbol = input
        .stock_symbol
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match (input.portfolio_id, symbol, input.purchase_date, input.quantity, input.price) {
        (Some(portfolio_id), Some(stock_symbol), Some(purchase_date), Some(quantity), Some(price))
            if quantity > zero && price > zero =>
        {
            Ok(NewHolding {
                portfolio_id,
                stock_symbol,
                purchase_date,
                quantity,
                price,
            })
        }
        _ => Err(AppError::Validation("Missing required fields".into())),
    }
}

/// A purchase date is acceptable when the symbol has no history at all, or
/// when history exists for that exact date.
pub fn check_purchase_date(symbol: &str, purchase_date: NaiveDate, known_dates: &[NaiveDate]) -> Result<(), AppError> {
    match known_dates.first() {
        None => Ok(()),
        Some(_) if known_dates.contains(&purchase_date) => Ok(()),
        Some(latest) => Err(AppError::Validation(format!(
            "No stock data available for {} on {}. The latest available date is {}.",
            symbol, purchase_date, latest
        ))),
    }
}

pub async fn create(pool: &PgPool, input: CreateHolding) -> Result<Holding, AppError> {
    let new_holding = validate(input)?;

    portfolio_service::fetch_one(pool, new_holding.portfolio_id).await?;

    let known_dates = db::snapshot_queries::fetch_trade_dates(pool, &new_holding.stock_symbol, None).await?;
    check_purchase_date(&new_holding.stock_symbol, new_holding.purchase_date, &known_dates)?;

    let holding = db::holding_queries::insert(pool, Holding::new(new_holding)).await?;
    Ok(holding)
}

/// Most recent trade dates for a symbol, newest first.
pub async fn trade_dates(pool: &PgPool, symbol: &str, limit: i64) -> Result<Vec<NaiveDate>, AppError> {
    let dates = db::snapshot_queries::fetch_trade_dates(pool, symbol.trim(), Some(limit)).await?;
    Ok(dates)
}

pub async fn symbols(pool: &PgPool) -> Result<Vec<StockSymbol>, AppError> {
    let symbols = db::snapshot_queries::fetch_symbols(pool).await?;
    Ok(symbols)
}
