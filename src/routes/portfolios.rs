use axum::extract::State;
use axum::routing::{delete, get};
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreatePortfolio, Portfolio, PortfolioQuery, PortfolioValuation};
use crate::routes::extract::{AppJson, AppPath, AppQuery};
use crate::services::auth_service::AuthUser;
use crate::services::{portfolio_service, valuation_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_portfolios).post(create_portfolio))
        .route("/:id", delete(delete_portfolio))
        .route("/:id/valuation", get(get_valuation))
}

pub async fn fetch_portfolios(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PortfolioQuery>,
) -> Result<Json<Vec<Portfolio>>, AppError> {
    info!("GET /api/portfolios - Fetching portfolios for user {:?}", query.user_id);
    let portfolios = portfolio_service::list_for_user(&state.pool, query.user_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch portfolios: {}", e);
            e
        })?;
    Ok(Json(portfolios))
}

pub async fn create_portfolio(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreatePortfolio>,
) -> Result<Json<Portfolio>, AppError> {
    info!("POST /api/portfolios - Creating portfolio");
    let portfolio = portfolio_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create portfolio: {}", e);
            e
        })?;
    Ok(Json(portfolio))
}

pub async fn delete_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /api/portfolios/{} - Deleting portfolio", id);
    portfolio_service::delete_owned(&state.pool, id, auth.user_id)
        .await
        .map_err(|e| {
            error!("Failed to delete portfolio {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_valuation(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<PortfolioValuation>, AppError> {
    info!("GET /api/portfolios/{}/valuation - Valuing portfolio", id);
    let valuation = valuation_service::value_portfolio(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to value portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(valuation))
}
