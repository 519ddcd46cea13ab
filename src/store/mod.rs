use crate::blog::{NewPost, Post};
use crate::error::StoreError;

pub mod file;
pub mod memory;
#[cfg(test)]
pub mod testing;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Persistence for posts. Posts are only ever created and read.
#[async_trait::async_trait]
pub trait PostStore: Send + Sync + std::fmt::Debug {
    async fn read_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError>;

    /// Fails with [`StoreError::Conflict`] if the slug is taken.
    async fn create(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Newest first
    async fn list(&self) -> Result<Vec<Post>, StoreError>;
}

pub(crate) fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.slug.cmp(&b.slug))
    });
}
