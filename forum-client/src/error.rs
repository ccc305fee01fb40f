use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the `forum-client` library.
pub enum ForumClientError {
    /// HTTP transport error (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The operation needs a stored identity; call `register` or `login`
    /// first.
    #[error("no identity: register or login first")]
    NoIdentity,

    /// The requested user or post does not exist.
    #[error("not found")]
    NotFound,

    /// The server rejected the request (validation or other client error).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result alias for `forum-client` operations.
pub type ForumClientResult<T> = Result<T, ForumClientError>;

impl ForumClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::InvalidRequest(message)
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}
