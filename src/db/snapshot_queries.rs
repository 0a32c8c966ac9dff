use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::models::{LatestClose, PriceSnapshot, StockSymbol};

/// Inserts or refreshes rows of the latest-price table, one per
/// (trade_date, symbol).
pub async fn upsert_latest(conn: &mut PgConnection, rows: &[PriceSnapshot]) -> Result<u64, sqlx::Error> {
    let mut affected = 0;
    for row in rows {
        let result = sqlx::query(
            r#"
            INSERT INTO bse_stocks (trade_date, symbol, name, open, high, low, close, volume)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (trade_date, symbol)
            DO UPDATE SET name = EXCLUDED.name,
                          open = EXCLUDED.open,
                          high = EXCLUDED.high,
                          low = EXCLUDED.low,
                          close = EXCLUDED.close,
                          volume = EXCLUDED.volume
            "#,
        )
        .bind(row.trade_date)
        .bind(&row.symbol)
        .bind(&row.name)
        .bind(&row.open)
        .bind(&row.high)
        .bind(&row.low)
        .bind(&row.close)
        .bind(row.volume)
        .execute(&mut *conn)
        .await?;
        affected += result.rows_affected();
    }
    Ok(affected)
}

/// Appends rows to the history table. Re-running for the same date adds
/// another copy of each row.
pub async fn insert_history(conn: &mut PgConnection, rows: &[PriceSnapshot]) -> Result<u64, sqlx::Error> {
    let mut affected = 0;
    for row in rows {
        let result = sqlx::query(
            "INSERT INTO stocks_portfolio (trade_date, symbol, name, open, high, low, close, volume)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(row.trade_date)
        .bind(&row.symbol)
        .bind(&row.name)
        .bind(&row.open)
        .bind(&row.high)
        .bind(&row.low)
        .bind(&row.close)
        .bind(row.volume)
        .execute(&mut *conn)
        .await?;
        affected += result.rows_affected();
    }
    Ok(affected)
}

pub async fn fetch_latest_for_date(
    pool: &PgPool,
    trade_date: NaiveDate,
    names: &[String],
) -> Result<Vec<PriceSnapshot>, sqlx::Error> {
    sqlx::query_as::<_, PriceSnapshot>(
        "SELECT trade_date, symbol, name, open, high, low, close, volume
         FROM bse_stocks
         WHERE trade_date = $1 AND name = ANY($2)
         ORDER BY name ASC",
    )
    .bind(trade_date)
    .bind(names)
    .fetch_all(pool)
    .await
}

/// Most recent close per symbol from the history table.
pub async fn fetch_latest_close_batch(
    pool: &PgPool,
    symbols: &[String],
) -> Result<HashMap<String, LatestClose>, sqlx::Error> {
    if symbols.is_empty() {
        return Ok(HashMap::new());
    }

    let closes = sqlx::query_as::<_, LatestClose>(
        r#"
        SELECT DISTINCT ON (symbol) symbol, trade_date, close
        FROM stocks_portfolio
        WHERE symbol = ANY($1)
        ORDER BY symbol, trade_date DESC
        "#,
    )
    .bind(symbols)
    .fetch_all(pool)
    .await?;

    Ok(closes.into_iter().map(|c| (c.symbol.clone(), c)).collect())
}

/// Distinct trade dates with history for a symbol, newest first. `None`
/// binds `LIMIT NULL`, which returns every date.
pub async fn fetch_trade_dates(
    pool: &PgPool,
    symbol: &str,
    limit: Option<i64>,
) -> Result<Vec<NaiveDate>, sqlx::Error> {
    sqlx::query_scalar::<_, NaiveDate>(
        "SELECT DISTINCT trade_date
         FROM stocks_portfolio
         WHERE symbol = $1
         ORDER BY trade_date DESC
         LIMIT $2",
    )
    .bind(symbol)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Every symbol with history, with its most recently stored name.
pub async fn fetch_symbols(pool: &PgPool) -> Result<Vec<StockSymbol>, sqlx::Error> {
    sqlx::query_as::<_, StockSymbol>(
        r#"
        SELECT DISTINCT ON (symbol) symbol, name
        FROM stocks_portfolio
        ORDER BY symbol, trade_date DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
