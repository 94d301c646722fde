pub mod estimate;
pub mod health;
pub mod rates;

use crate::error::AppError;
use crate::state::AppState;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

pub fn build_router(state: AppState) -> Router {
    // CORS configuration
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>().unwrap())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .route(
            "/api/v1/campaign/estimate",
            axum::routing::post(estimate::estimate),
        )
        .route(
            "/api/v1/campaign/estimate/debug",
            axum::routing::post(estimate::estimate_debug),
        )
        .route("/api/v1/rates", axum::routing::get(rates::rates))
        .fallback(not_found)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("no such route".into())
}
