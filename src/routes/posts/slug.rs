use crate::blog::{Post, Slug};
use crate::error::BlogError;
use crate::state::SharedState;
use crate::store::PostStore;
use axum::extract::{Path, State};
use axum::response::Html;

#[derive(Debug, Clone)]
pub struct PostPage {
    pub post: Post,
    pub html: String,
}

/// Looks up a post and renders its markdown. Read-only.
pub async fn load(posts: &dyn PostStore, slug: Option<&str>) -> Result<PostPage, BlogError> {
    let Some(slug) = slug.filter(|slug| !slug.is_empty()) else {
        return Err(BlogError::MissingParameter("slug"));
    };

    let Some(post) = posts.read_by_slug(slug).await? else {
        return Err(BlogError::NotFound(slug.to_owned()));
    };

    let html = crate::markdown::render(post.markdown.clone()).await?;

    Ok(PostPage { post, html })
}

pub(super) async fn get(
    State(state): SharedState,
    Path(slug): Path<Slug>,
) -> Result<Html<String>, BlogError> {
    let PostPage { post, html } = load(state.posts.as_ref(), Some(&slug)).await?;

    Ok(crate::html::page(
        &post.title,
        &format!(
            "<h1>{}</h1>\n<article>\n{html}</article>",
            html_escape::encode_text(&post.title)
        ),
    ))
}
