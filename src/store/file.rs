use crate::blog::{NewPost, Post};
use crate::error::StoreError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Stores each post as `<root>/post/<encoded slug>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> FileStore {
        FileStore { root: root.into() }
    }

    /// Creates the post folder if it isn't there yet.
    pub async fn open(root: impl Into<PathBuf>) -> std::io::Result<FileStore> {
        let store = FileStore::new(root);
        tokio::fs::create_dir_all(store.posts_dir()).await?;
        Ok(store)
    }

    fn posts_dir(&self) -> PathBuf {
        self.root.join("post")
    }

    fn post_path(&self, slug: &str) -> Result<PathBuf, StoreError> {
        let file_name = slug_file_name(slug);
        if file_name.len() > MAX_FILE_NAME_LEN {
            return Err(StoreError::InvalidSlug(slug.to_owned()));
        }
        Ok(self.posts_dir().join(file_name))
    }
}

// most filesystems cap a path component at 255 bytes
const MAX_FILE_NAME_LEN: usize = 255;

/// Percent-encodes the slug so `/`, `\` and friends can't leave the post folder.
/// `%` is always encoded, so escaping a leading `.` keeps the mapping one-to-one.
fn slug_file_name(slug: &str) -> String {
    let encoded = urlencoding::encode(slug);
    match encoded.strip_prefix('.') {
        Some(rest) => format!("%2E{rest}.json"),
        None => format!("{encoded}.json"),
    }
}

async fn read_post(path: &Path) -> Result<Option<Post>, StoreError> {
    let file = match tokio::fs::read(path).await {
        Ok(it) => it,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    Ok(Some(serde_json::from_slice(&file)?))
}

#[async_trait::async_trait]
impl super::PostStore for FileStore {
    async fn read_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        // nothing can be stored under a slug too long to encode
        let Ok(path) = self.post_path(slug) else {
            return Ok(None);
        };
        read_post(&path).await
    }

    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let path = self.post_path(&post.slug)?;
        let post = post.into_post(chrono::Utc::now());
        let bytes = serde_json::to_vec_pretty(&post)?;

        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(it) => it,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StoreError::Conflict(post.slug));
            }
            Err(err) => return Err(err.into()),
        };

        let written = async {
            file.write_all(&bytes).await?;
            file.flush().await
        }
        .await;

        if let Err(err) = written {
            // don't leave a half-written record behind
            drop(file);
            if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                tracing::warn!(?path, %remove_err, "couldn't remove partial post file");
            }
            return Err(err.into());
        }

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts_dir = match tokio::fs::read_dir(self.posts_dir()).await {
            Ok(it) => it,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut posts = Vec::new();
        while let Some(entry) = posts_dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            match read_post(&path).await {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => (),
                Err(StoreError::Serialization(err)) => {
                    tracing::warn!(?path, %err, "skipping malformed post file");
                }
                Err(err) => return Err(err),
            }
        }

        super::sort_newest_first(&mut posts);
        Ok(posts)
    }
}
