use crate::state::NestedRouter;
use axum::routing::get;

mod admin;
mod index;
mod slug;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(index::get))
        .route("/admin", get(admin::index::get))
        .route("/admin/new", get(admin::new::get).post(admin::new::post))
        .route("/:slug", get(slug::get))
}
