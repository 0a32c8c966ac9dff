use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::services::trade_date::TradeDate;

#[derive(Debug, Error)]
pub enum BhavcopyError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("bhavcopy not published for {0}")]
    NotFound(String),
}

/// Where end-of-day CSV files come from.
#[async_trait]
pub trait BhavcopySource: Send + Sync {
    async fn fetch(&self, trade_date: &TradeDate) -> Result<Vec<u8>, BhavcopyError>;
}

pub struct BseBhavcopyClient {
    client: reqwest::Client,
    base_url: String,
}

impl BseBhavcopyClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, BhavcopyError> {
        // bseindia.com rejects requests without a browser-like agent
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; BsePortfolio/0.1)")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| BhavcopyError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn file_url(&self, trade_date: &TradeDate) -> String {
        format!(
            "{}/BhavCopy_BSE_CM_0_0_0_{}_F_0000.CSV",
            self.base_url,
            trade_date.stamp()
        )
    }
}

#[async_trait]
impl BhavcopySource for BseBhavcopyClient {
    async fn fetch(&self, trade_date: &TradeDate) -> Result<Vec<u8>, BhavcopyError> {
        let url = self.file_url(trade_date);
        tracing::info!("Downloading bhavcopy from {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BhavcopyError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BhavcopyError::NotFound(trade_date.iso()));
        }
        if !resp.status().is_success() {
            return Err(BhavcopyError::BadResponse(format!("HTTP {}", resp.status())));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| BhavcopyError::Network(e.to_string()))?;

        Ok(body.to_vec())
    }
}
