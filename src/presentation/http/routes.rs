use super::{
    handlers::{health, suggestions},
    state::AppState,
};
use axum::{Router, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/api/search/autocomplete", get(suggestions::autocomplete))
        .with_state(state)
}
