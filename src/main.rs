use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use bse_portfolio_backend::app;
use bse_portfolio_backend::config::AppConfig;
use bse_portfolio_backend::external::bhavcopy::BseBhavcopyClient;
use bse_portfolio_backend::external::finnhub::FinnhubProvider;
use bse_portfolio_backend::logging::{init_logging, LoggingConfig};
use bse_portfolio_backend::services::scheduler_service::RefreshScheduler;
use bse_portfolio_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to Postgres")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    if config.finnhub_api_key.is_none() {
        tracing::warn!("FINNHUB_API_KEY not set; /api/stock-indexes will return empty quotes");
    }

    let bhavcopy_source = BseBhavcopyClient::new(&config.bhavcopy_base_url, config.bse_fetch_timeout_secs)
        .context("Failed to build bhavcopy client")?;

    let state = AppState {
        pool,
        bhavcopy_source: Arc::new(bhavcopy_source),
        quote_provider: Arc::new(FinnhubProvider::new(config.finnhub_api_key.clone())),
        refresh_lock: Arc::new(Mutex::new(())),
        config: Arc::new(config),
    };

    let mut scheduler = if state.config.refresh_schedule_enabled {
        let schedule = state.config.refresh_cron.clone();
        let mut scheduler = RefreshScheduler::new(state.clone()).await?;
        scheduler.start(&schedule).await?;
        Some(scheduler)
    } else {
        None
    };

    let addr = state.config.socket_addr()?;
    let app = app::create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 BSE portfolio backend running at http://{}/", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.stop().await?;
    }

    tracing::info!("👋 BSE portfolio backend stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
