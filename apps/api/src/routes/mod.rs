pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::analysis::handlers::handle_analyze;
use crate::state::AppState;
use crate::upload::handlers::handle_upload;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/info", get(health::info_handler))
        .route("/analyze", post(handle_analyze))
        .route("/upload", post(handle_upload))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        // Web interface and assets
        .fallback_service(static_files)
        .with_state(state)
}
