use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreatePortfolio, Portfolio};

pub async fn list_for_user(pool: &PgPool, user_id: Option<Uuid>) -> Result<Vec<Portfolio>, AppError> {
    let user_id = user_id.ok_or_else(|| AppError::Validation("Missing userId".into()))?;
    let portfolios = db::portfolio_queries::fetch_for_user(pool, user_id).await?;
    Ok(portfolios)
}

pub async fn create(pool: &PgPool, input: CreatePortfolio) -> Result<Portfolio, AppError> {
    let name = input.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    let (Some(name), Some(user_id)) = (name, input.user_id) else {
        return Err(AppError::Validation("Missing name or userId".into()));
    };

    let portfolio = db::portfolio_queries::insert(pool, Portfolio::new(name, user_id)).await?;
    Ok(portfolio)
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Portfolio, AppError> {
    db::portfolio_queries::fetch_one(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Portfolio not found".into()))
}

pub async fn delete_owned(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    match db::portfolio_queries::delete_owned(pool, id, user_id).await? {
        0 => Err(AppError::NotFound("Portfolio not found".into())),
        _ => Ok(()),
    }
}
