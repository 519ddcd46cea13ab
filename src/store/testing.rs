use super::{MemoryStore, PostStore};
use crate::blog::{NewPost, Post};
use crate::error::StoreError;
use std::sync::Mutex;

/// Wraps a [`MemoryStore`] and remembers every `create` call it sees.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    creates: Mutex<Vec<NewPost>>,
}

impl RecordingStore {
    pub fn creates(&self) -> Vec<NewPost> {
        self.creates.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PostStore for RecordingStore {
    async fn read_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        self.inner.read_by_slug(slug).await
    }

    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        self.creates.lock().unwrap().push(post.clone());
        self.inner.create(post).await
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        self.inner.list().await
    }
}
