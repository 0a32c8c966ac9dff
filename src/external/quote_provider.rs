use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalQuote {
    pub current: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
}

#[derive(Debug, Error)]
pub enum QuoteProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,

    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<ExternalQuote, QuoteProviderError>;
}
