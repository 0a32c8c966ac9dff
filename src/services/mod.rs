pub mod trade_date;
pub mod tracked_securities;
pub mod bhavcopy_parser;
pub mod ingestion_service;
pub mod scheduler_service;
pub mod auth_service;
pub mod portfolio_service;
pub mod holding_service;
pub mod valuation_service;
pub mod quote_service;
