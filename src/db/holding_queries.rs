use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Holding;

pub async fn fetch_for_portfolio(pool: &PgPool, portfolio_id: Uuid) -> Result<Vec<Holding>, sqlx::Error> {
    sqlx::query_as::<_, Holding>(
        "SELECT id, portfolio_id, stock_symbol, purchase_date, quantity, price, created_at
         FROM portfolio_stocks
         WHERE portfolio_id = $1
         ORDER BY purchase_date DESC",
    )
    .bind(portfolio_id)
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, holding: Holding) -> Result<Holding, sqlx::Error> {
    sqlx::query_as::<_, Holding>(
        "INSERT INTO portfolio_stocks (id, portfolio_id, stock_symbol, purchase_date, quantity, price, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id, portfolio_id, stock_symbol, purchase_date, quantity, price, created_at",
    )
    .bind(holding.id)
    .bind(holding.portfolio_id)
    .bind(holding.stock_symbol)
    .bind(holding.purchase_date)
    .bind(holding.quantity)
    .bind(holding.price)
    .bind(holding.created_at)
    .fetch_one(pool)
    .await
}
