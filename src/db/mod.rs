pub mod user_queries;
pub mod portfolio_queries;
pub mod holding_queries;
pub mod stock_price_queries;
pub mod snapshot_queries;
