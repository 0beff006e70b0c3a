//! Error type for the site builder.

use std::path::PathBuf;

use portfolio::util::links::ContentError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid content: {0}")]
    Content(#[from] ContentError),
    #[error("{count} content issue(s) found")]
    Issues { count: usize },
    #[error("failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to serialize content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging init failed: {0}")]
    Logging(String),
}
