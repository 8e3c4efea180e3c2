//! Router construction, shared by the binary and the HTTP tests.

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::paths;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(handlers::study_page))
    .route("/reveal", post(handlers::reveal))
    .route("/hide", post(handlers::hide))
    .route("/toggle", post(handlers::toggle))
    .route("/next", post(handlers::next))
    .route("/reset", post(handlers::reset))
    .route("/api/card", get(handlers::api_card))
    .route("/api/action/{action}", post(handlers::api_action))
    .nest_service("/static", ServeDir::new(paths::STATIC_DIR))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
