use axum::routing::get;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::routes::{auth, bse, health, holdings, indexes, portfolios, stocks};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.frontend_url);

    Router::<AppState>::new()
        .route("/", get(health::root))
        .nest("/health", health::router())
        .nest("/api", auth::router())
        .nest("/api/portfolios", portfolios::router())
        .nest("/api/portfolio-stocks", holdings::router())
        .nest("/api/stocks", stocks::router())
        .nest("/api/stock-indexes", indexes::router())
        .merge(bse::router())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    match HeaderValue::from_str(frontend_url.trim_end_matches('/')) {
        Ok(origin) => base.allow_origin(origin).allow_credentials(true),
        Err(e) => {
            warn!("Invalid FRONTEND_URL {:?} ({}); cross-origin requests disabled", frontend_url, e);
            base
        }
    }
}
