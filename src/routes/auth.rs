use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::routes::extract::AppJson;
use crate::services::auth_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub async fn register(
    State(state): State<AppState>,
    AppJson(data): AppJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    info!("POST /register - Registering user");
    let response = auth_service::register(&state.pool, &state.config, data)
        .await
        .map_err(|e| {
            error!("Registration failed: {}", e);
            e
        })?;
    Ok(Json(response))
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(data): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    info!("POST /login - Logging in");
    let response = auth_service::login(&state.pool, &state.config, data)
        .await
        .map_err(|e| {
            error!("Login failed: {}", e);
            e
        })?;
    Ok(Json(response))
}
