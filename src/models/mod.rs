mod user;
mod portfolio;
mod holding;
mod price_snapshot;
mod stock_price;
mod quote;
mod valuation;

pub use user::*;
pub use portfolio::*;
pub use holding::*;
pub use price_snapshot::*;
pub use stock_price::*;
pub use quote::*;
pub use valuation::*;
