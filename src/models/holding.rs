use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// A recorded purchase inside a portfolio. Quantity and price never change
// after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Holding {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub stock_symbol: String,
    pub purchase_date: NaiveDate,
    pub quantity: BigDecimal,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHolding {
    pub portfolio_id: Option<Uuid>,
    pub stock_symbol: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub quantity: Option<BigDecimal>,
    pub price: Option<BigDecimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingQuery {
    pub portfolio_id: Option<Uuid>,
}

/// A `CreateHolding` whose required fields have all been checked.
#[derive(Debug, Clone)]
pub struct NewHolding {
    pub portfolio_id: Uuid,
    pub stock_symbol: String,
    pub purchase_date: NaiveDate,
    pub quantity: BigDecimal,
    pub price: BigDecimal,
}

impl Holding {
    pub(crate) fn new(input: NewHolding) -> Self {
        Self {
            id: Uuid::new_v4(),
            portfolio_id: input.portfolio_id,
            stock_symbol: input.stock_symbol,
            purchase_date: input.purchase_date,
            quantity: input.quantity,
            price: input.price,
            created_at: Utc::now(),
        }
    }
}
