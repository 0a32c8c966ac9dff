use sqlx::PgPool;

use crate::models::StockPrice;

pub async fn fetch_recent(pool: &PgPool, limit: i64) -> Result<Vec<StockPrice>, sqlx::Error> {
    sqlx::query_as::<_, StockPrice>(
        "SELECT id, symbol, date, open, high, low, close, adj_close, volume
         FROM stock_prices
         ORDER BY date DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
