use crate::error::BlogError;
use crate::state::SharedState;
use axum::extract::State;
use axum::response::Html;

pub(crate) async fn get(State(state): SharedState) -> Result<Html<String>, BlogError> {
    let posts = state.posts.list().await?;

    let list = crate::html::link_list(
        posts
            .iter()
            .map(|post| (crate::blog::post_url(&post.slug), post.title.as_str())),
    );

    Ok(crate::html::page(
        "Blog Admin",
        &format!(
            "<h1>Blog Admin</h1>\n<nav>\n{list}\n</nav>\n<p><a href=\"{}/new\">Create a New Post</a></p>",
            crate::blog::ADMIN_PATH
        ),
    ))
}
