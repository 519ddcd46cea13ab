use crate::error::BlogError;
use crate::state::SharedState;
use axum::extract::State;
use axum::response::Html;

pub(super) async fn get(State(state): SharedState) -> Result<Html<String>, BlogError> {
    let posts = state.posts.list().await?;

    let list = if posts.is_empty() {
        String::from("<p>No posts yet.</p>")
    } else {
        crate::html::link_list(
            posts
                .iter()
                .map(|post| (crate::blog::post_url(&post.slug), post.title.as_str())),
        )
    };

    Ok(crate::html::page(
        "Posts",
        &format!(
            "<h1>Posts</h1>\n{list}\n<p><a href=\"{}\">Admin</a></p>",
            crate::blog::ADMIN_PATH
        ),
    ))
}
