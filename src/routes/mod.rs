pub(crate) mod auth;
pub(crate) mod bse;
pub(crate) mod extract;
pub(crate) mod health;
pub(crate) mod holdings;
pub(crate) mod indexes;
pub(crate) mod portfolios;
pub(crate) mod stocks;
