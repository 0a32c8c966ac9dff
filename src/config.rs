use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_BHAVCOPY_BASE_URL: &str = "https://www.bseindia.com/download/BhavCopy/Equity";
pub const DEFAULT_FRONTEND_URL: &str = "https://stocksportfolio.vercel.app";
pub const DEFAULT_REFRESH_CRON: &str = "0 30 20 * * Mon-Fri";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub finnhub_api_key: Option<String>,
    pub bhavcopy_base_url: String,
    pub bse_fetch_timeout_secs: u64,
    pub db_max_connections: u32,
    pub refresh_schedule_enabled: bool,
    pub refresh_cron: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET must be set")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", raw))?,
            None => 5000,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_ttl_hours: parse_or(&lookup, "JWT_TTL_HOURS", 24),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            frontend_url: lookup("FRONTEND_URL")
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            finnhub_api_key: lookup("FINNHUB_API_KEY").filter(|k| !k.trim().is_empty()),
            bhavcopy_base_url: lookup("BSE_BHAVCOPY_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BHAVCOPY_BASE_URL.to_string()),
            bse_fetch_timeout_secs: parse_or(&lookup, "BSE_FETCH_TIMEOUT_SECS", 30),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10),
            refresh_schedule_enabled: parse_or(&lookup, "BSE_REFRESH_SCHEDULE_ENABLED", false),
            // sec min hour day month weekday
            refresh_cron: lookup("BSE_REFRESH_CRON")
                .unwrap_or_else(|| DEFAULT_REFRESH_CRON.to_string()),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid HOST/PORT: {}:{}", self.host, self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/bse"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.frontend_url, DEFAULT_FRONTEND_URL);
        assert_eq!(config.bhavcopy_base_url, DEFAULT_BHAVCOPY_BASE_URL);
        assert_eq!(config.jwt_ttl_hours, 24);
        assert_eq!(config.bse_fetch_timeout_secs, 30);
        assert_eq!(config.db_max_connections, 10);
        assert!(!config.refresh_schedule_enabled);
        assert_eq!(config.refresh_cron, DEFAULT_REFRESH_CRON);
        assert!(config.finnhub_api_key.is_none());
    }

    #[test]
    fn test_missing_required_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "secret")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/bse"),
            ("JWT_SECRET", "secret"),
            ("PORT", "8080"),
            ("BSE_BHAVCOPY_BASE_URL", "http://mirror.local/bhav/"),
            ("BSE_REFRESH_SCHEDULE_ENABLED", "true"),
            ("FINNHUB_API_KEY", "  "),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.bhavcopy_base_url, "http://mirror.local/bhav");
        assert!(config.refresh_schedule_enabled);
        assert!(config.finnhub_api_key.is_none());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/bse"),
            ("JWT_SECRET", "secret"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }
}
