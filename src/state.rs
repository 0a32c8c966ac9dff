use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::external::bhavcopy::BhavcopySource;
use crate::external::quote_provider::QuoteProvider;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    pub bhavcopy_source: Arc<dyn BhavcopySource>,
    pub quote_provider: Arc<dyn QuoteProvider>,
    /// Held for the duration of a bhavcopy refresh.
    pub refresh_lock: Arc<Mutex<()>>,
}
