use crate::state::State;
use axum::response::Redirect;
use axum::routing::get;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

pub mod posts;

pub type App = NormalizePath<axum::Router>;

/// The full service: trailing slashes are trimmed before routing.
pub fn app(state: Arc<State>) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(route(state))
}

pub fn route(state: Arc<State>) -> axum::Router {
    axum::Router::new()
        .route("/", get(|| async { Redirect::to(crate::blog::POSTS_PATH) }))
        .nest("/posts", posts::route())
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
