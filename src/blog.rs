use serde::{Deserialize, Serialize};

pub type Slug = String;

pub const DEFAULT_STORE_PATH: &str = "./blog-store";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8010";

pub const POSTS_PATH: &str = "/posts";
pub const ADMIN_PATH: &str = "/posts/admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: Slug,
    pub title: String,
    pub markdown: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Fields of a post that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub slug: Slug,
    pub markdown: String,
}

impl NewPost {
    pub fn into_post(self, now: chrono::DateTime<chrono::Utc>) -> Post {
        Post {
            slug: self.slug,
            title: self.title,
            markdown: self.markdown,
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn post_url(slug: &str) -> String {
    format!("{POSTS_PATH}/{}", urlencoding::encode(slug))
}
