use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::IndexQuote;
use crate::services::quote_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stock_indexes))
}

pub async fn stock_indexes(State(state): State<AppState>) -> Json<Vec<IndexQuote>> {
    info!("GET /api/stock-indexes - Fetching dashboard quotes");
    Json(quote_service::fetch_index_quotes(state.quote_provider.as_ref()).await)
}
