use async_trait::async_trait;
use serde::Deserialize;

use crate::external::quote_provider::{ExternalQuote, QuoteProvider, QuoteProviderError};

const FINNHUB_QUOTE_URL: &str = "https://finnhub.io/api/v1/quote";

pub struct FinnhubProvider {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl FinnhubProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

// Finnhub abbreviates: c = current, d = change, dp = percent change
#[derive(Debug, Deserialize)]
struct FinnhubQuote {
    c: Option<f64>,
    d: Option<f64>,
    dp: Option<f64>,
}

impl From<FinnhubQuote> for ExternalQuote {
    fn from(q: FinnhubQuote) -> Self {
        Self {
            current: q.c,
            change: q.d,
            percent_change: q.dp,
        }
    }
}

#[async_trait]
impl QuoteProvider for FinnhubProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<ExternalQuote, QuoteProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| QuoteProviderError::NotConfigured("FINNHUB_API_KEY not set".into()))?;

        let resp = self
            .client
            .get(FINNHUB_QUOTE_URL)
            .query(&[("symbol", symbol), ("token", api_key)])
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(QuoteProviderError::RateLimited);
        }
        if !resp.status().is_success() {
            return Err(QuoteProviderError::BadResponse(format!("HTTP {}", resp.status())));
        }

        let quote = resp
            .json::<FinnhubQuote>()
            .await
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))?;

        Ok(quote.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_fields_map_through() {
        let raw: FinnhubQuote = serde_json::from_str(r#"{"c": 189.5, "d": -1.25, "dp": -0.66, "h": 191.0}"#).unwrap();
        let quote: ExternalQuote = raw.into();
        assert_eq!(quote.current, Some(189.5));
        assert_eq!(quote.change, Some(-1.25));
        assert_eq!(quote.percent_change, Some(-0.66));
    }

    #[test]
    fn test_null_fields_stay_none() {
        let raw: FinnhubQuote = serde_json::from_str(r#"{"c": 0, "d": null, "dp": null}"#).unwrap();
        let quote: ExternalQuote = raw.into();
        assert_eq!(quote.current, Some(0.0));
        assert_eq!(quote.change, None);
    }

    #[tokio::test]
    async fn test_missing_key_is_reported_without_network() {
        let provider = FinnhubProvider::new(None);
        let err = provider.fetch_quote("AAPL").await.unwrap_err();
        assert!(matches!(err, QuoteProviderError::NotConfigured(_)));
    }
}
