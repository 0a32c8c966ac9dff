use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{CreateHolding, Holding, HoldingQuery};
use crate::routes::extract::{AppJson, AppQuery};
use crate::services::holding_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fetch_holdings).post(create_holding))
}

pub async fn fetch_holdings(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<HoldingQuery>,
) -> Result<Json<Vec<Holding>>, AppError> {
    info!("GET /api/portfolio-stocks - Fetching holdings for {:?}", query.portfolio_id);
    let holdings = holding_service::list_for_portfolio(&state.pool, query.portfolio_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch holdings: {}", e);
            e
        })?;
    Ok(Json(holdings))
}

pub async fn create_holding(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateHolding>,
) -> Result<Json<Holding>, AppError> {
    info!("POST /api/portfolio-stocks - Adding holding");
    let holding = holding_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to add holding: {}", e);
            e
        })?;
    Ok(Json(holding))
}
