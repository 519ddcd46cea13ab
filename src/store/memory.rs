use crate::blog::{NewPost, Post, Slug};
use crate::error::StoreError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<BTreeMap<Slug, Post>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

#[async_trait::async_trait]
impl super::PostStore for MemoryStore {
    async fn read_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.get(slug).cloned())
    }

    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        if posts.contains_key(&post.slug) {
            return Err(StoreError::Conflict(post.slug));
        }

        let post = post.into_post(chrono::Utc::now());
        posts.insert(post.slug.clone(), post.clone());

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.posts.read().await.values().cloned().collect::<Vec<_>>();
        super::sort_newest_first(&mut posts);

        Ok(posts)
    }
}
