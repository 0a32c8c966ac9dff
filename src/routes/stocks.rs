use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use tracing::{error, info};

use crate::db;
use crate::errors::AppError;
use crate::models::{StockPrice, StockSymbol};
use crate::routes::extract::AppPath;
use crate::services::holding_service;
use crate::state::AppState;

const RECENT_PRICES_LIMIT: i64 = 50;
const TRADE_DATES_LIMIT: i64 = 10;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_stocks))
        .route("/symbols", get(fetch_symbols))
        .route("/:symbol/dates", get(fetch_trade_dates))
}

pub async fn fetch_stocks(State(state): State<AppState>) -> Result<Json<Vec<StockPrice>>, AppError> {
    info!("GET /api/stocks - Fetching latest {} price rows", RECENT_PRICES_LIMIT);
    let prices = db::stock_price_queries::fetch_recent(&state.pool, RECENT_PRICES_LIMIT)
        .await
        .map_err(|e| {
            error!("Failed to fetch stocks: {}", e);
            AppError::Db(e)
        })?;
    Ok(Json(prices))
}

pub async fn fetch_symbols(State(state): State<AppState>) -> Result<Json<Vec<StockSymbol>>, AppError> {
    info!("GET /api/stocks/symbols - Fetching symbols with history");
    let symbols = holding_service::symbols(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch symbols: {}", e);
            e
        })?;
    Ok(Json(symbols))
}

pub async fn fetch_trade_dates(
    State(state): State<AppState>,
    AppPath(symbol): AppPath<String>,
) -> Result<Json<Vec<NaiveDate>>, AppError> {
    info!("GET /api/stocks/{}/dates - Fetching trade dates", symbol);
    let dates = holding_service::trade_dates(&state.pool, &symbol, TRADE_DATES_LIMIT)
        .await
        .map_err(|e| {
            error!("Failed to fetch trade dates for {}: {}", symbol, e);
            e
        })?;
    Ok(Json(dates))
}
