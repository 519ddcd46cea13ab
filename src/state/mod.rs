use crate::store::PostStore;
use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug, Clone)]
pub struct State {
    pub posts: Arc<dyn PostStore>,
}

impl State {
    pub fn new(posts: Arc<dyn PostStore>) -> State {
        State { posts }
    }
}
