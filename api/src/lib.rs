pub mod error_response;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing_page))
        .route("/extract-data/", post(handlers::extract_data))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
