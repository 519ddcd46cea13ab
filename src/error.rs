use crate::blog::Slug;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a post with slug {0:?} already exists")]
    Conflict(Slug),
    #[error("slug {0:?} can't be used as a storage key")]
    InvalidSlug(Slug),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed post record: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("couldn't format markdown: {0}")]
    Format(#[from] std::io::Error),
    #[error("markdown render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("missing required parameter {0:?}")]
    MissingParameter(&'static str),
    #[error("no post with slug {0:?}")]
    NotFound(Slug),
    #[error("field {field:?} must be a single string")]
    TypeContractViolation { field: &'static str },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl BlogError {
    pub fn status(&self) -> StatusCode {
        match self {
            BlogError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            BlogError::NotFound(_) => StatusCode::NOT_FOUND,
            BlogError::TypeContractViolation { .. } => StatusCode::BAD_REQUEST,
            BlogError::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            BlogError::Store(StoreError::InvalidSlug(_)) => StatusCode::BAD_REQUEST,
            BlogError::Store(_) | BlogError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        (status, self.to_string()).into_response()
    }
}
