pub mod config;
pub mod dispatcher;
pub mod emitters;
pub mod http;
pub mod ids;
pub mod keywords;
pub mod planner;
pub mod presets;
pub mod protocol;
pub mod registry;
pub mod state;

pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(http::chat::chat))
        .route("/health", get(http::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
