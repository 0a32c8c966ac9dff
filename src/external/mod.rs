pub mod bhavcopy;
pub mod quote_provider;
pub mod finnhub;
