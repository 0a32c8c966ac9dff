use std::collections::HashMap;

use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{Holding, HoldingValuation, LatestClose, PortfolioValuation};
use crate::services::portfolio_service;

/// Values holdings against the latest known closes. A holding whose symbol
/// has no close, or only a non-positive one, is valued at its purchase price.
pub fn value_holdings(
    portfolio_id: Uuid,
    holdings: &[Holding],
    closes: &HashMap<String, LatestClose>,
) -> PortfolioValuation {
    let zero = BigDecimal::from(0);
    let mut invested_total = zero.clone();
    let mut market_total = zero.clone();

    let valuations: Vec<HoldingValuation> = holdings
        .iter()
        .map(|h| {
            // Unparseable closes are stored as 0
            let latest = closes.get(&h.stock_symbol).filter(|c| c.close > zero);
            let current_price = latest.map(|c| c.close.clone()).unwrap_or_else(|| h.price.clone());
            let invested_value = &h.price * &h.quantity;
            let market_value = &current_price * &h.quantity;

            invested_total = &invested_total + &invested_value;
            market_total = &market_total + &market_value;

            HoldingValuation {
                holding_id: h.id,
                stock_symbol: h.stock_symbol.clone(),
                quantity: h.quantity.clone(),
                purchase_price: h.price.clone(),
                current_price,
                price_date: latest.map(|c| c.trade_date),
                gain: &market_value - &invested_value,
                invested_value,
                market_value,
            }
        })
        .collect();

    let gain = &market_total - &invested_total;
    let gain_percent = if invested_total == zero {
        zero
    } else {
        (&gain * BigDecimal::from(100) / invested_total.clone()).round(2)
    };

    PortfolioValuation {
        portfolio_id,
        holdings: valuations,
        invested_value: invested_total,
        market_value: market_total,
        gain,
        gain_percent,
    }
}

pub async fn value_portfolio(pool: &PgPool, portfolio_id: Uuid) -> Result<PortfolioValuation, AppError> {
    portfolio_service::fetch_one(pool, portfolio_id).await?;

    let holdings = db::holding_queries::fetch_for_portfolio(pool, portfolio_id).await?;

    let mut symbols: Vec<String> = holdings.iter().map(|h| h.stock_symbol.clone()).collect();
    symbols.sort();
    symbols.dedup();

    let closes = db::snapshot_queries::fetch_latest_close_batch(pool, &symbols).await?;
    Ok(value_holdings(portfolio_id, &holdings, &closes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn holding(symbol: &str, quantity: &str, price: &str) -> Holding {
        Holding {
            id: Uuid::new_v4(),
            portfolio_id: Uuid::nil(),
            stock_symbol: symbol.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            quantity: dec(quantity),
            price: dec(price),
            created_at: Utc::now(),
        }
    }

    fn close(symbol: &str, price: &str) -> (String, LatestClose) {
        (
            symbol.to_string(),
            LatestClose {
                symbol: symbol.to_string(),
                trade_date: NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(),
                close: dec(price),
            },
        )
    }

    #[test]
    fn test_missing_snapshot_falls_back_to_purchase_price() {
        let holdings = vec![holding("500325", "4", "2500")];
        let valuation = value_holdings(Uuid::nil(), &holdings, &HashMap::new());

        let only = &valuation.holdings[0];
        assert_eq!(only.current_price, dec("2500"));
        assert_eq!(only.market_value, dec("10000"));
        assert_eq!(only.market_value, only.invested_value);
        assert_eq!(only.price_date, None);
        assert_eq!(valuation.gain, BigDecimal::from(0));
    }

    #[test]
    fn test_zero_close_falls_back_to_purchase_price() {
        let holdings = vec![holding("500325", "4", "2500")];
        let closes: HashMap<_, _> = vec![close("500325", "0")].into_iter().collect();

        let valuation = value_holdings(Uuid::nil(), &holdings, &closes);

        let only = &valuation.holdings[0];
        assert_eq!(only.current_price, dec("2500"));
        assert_eq!(only.market_value, dec("10000"));
        assert_eq!(only.price_date, None);
        assert_eq!(valuation.market_value, dec("10000"));
        assert_eq!(valuation.gain_percent, BigDecimal::from(0));
    }

    #[test]
    fn test_totals_use_latest_close() {
        let holdings = vec![
            holding("500325", "10", "2500"),
            holding("500180", "5", "1600"),
            holding("532540", "2", "3000"),
        ];
        let closes: HashMap<_, _> = vec![close("500325", "2550"), close("500180", "1500")]
            .into_iter()
            .collect();

        let valuation = value_holdings(Uuid::nil(), &holdings, &closes);

        // 25000 + 8000 + 6000
        assert_eq!(valuation.invested_value, dec("39000"));
        // 25500 + 7500 + 6000
        assert_eq!(valuation.market_value, dec("39000"));
        assert_eq!(valuation.holdings[0].gain, dec("500"));
        assert_eq!(valuation.holdings[1].gain, dec("-500"));
        assert_eq!(valuation.gain_percent, BigDecimal::from(0));
    }

    #[test]
    fn test_gain_percent() {
        let holdings = vec![holding("500325", "10", "2000")];
        let closes: HashMap<_, _> = vec![close("500325", "2550")].into_iter().collect();

        let valuation = value_holdings(Uuid::nil(), &holdings, &closes);
        assert_eq!(valuation.gain, dec("5500"));
        assert_eq!(valuation.gain_percent, dec("27.5"));
    }

    #[test]
    fn test_empty_portfolio_is_all_zero() {
        let valuation = value_holdings(Uuid::nil(), &[], &HashMap::new());
        assert!(valuation.holdings.is_empty());
        assert_eq!(valuation.invested_value, BigDecimal::from(0));
        assert_eq!(valuation.gain_percent, BigDecimal::from(0));
    }
}
