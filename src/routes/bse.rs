use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::{AppError, IngestError};
use crate::models::{PriceSnapshot, RefreshSummary};
use crate::services::ingestion_service;
use crate::services::trade_date::TradeDate;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/latest-bse", get(latest_bse))
        .route("/refresh-bse", get(refresh_bse))
}

pub async fn latest_bse(State(state): State<AppState>) -> Result<Json<Vec<PriceSnapshot>>, AppError> {
    let trade_date = TradeDate::now_local();
    info!("GET /latest-bse - Fetching snapshot for {}", trade_date.iso());
    let rows = ingestion_service::latest_snapshot(&state.pool, trade_date)
        .await
        .map_err(|e| {
            error!("Failed to fetch latest snapshot: {}", e);
            e
        })?;
    Ok(Json(rows))
}

pub async fn refresh_bse(State(state): State<AppState>) -> Result<Json<RefreshSummary>, IngestError> {
    let trade_date = TradeDate::now_local();
    info!("GET /refresh-bse - Refreshing bhavcopy for {}", trade_date.iso());
    let summary = ingestion_service::refresh(
        &state.pool,
        state.bhavcopy_source.as_ref(),
        &state.refresh_lock,
        trade_date,
    )
    .await
    .map_err(|e| {
        error!("Bhavcopy refresh failed: {}", e);
        e
    })?;
    Ok(Json(summary))
}
