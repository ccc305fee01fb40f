use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, Reply};

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: String,
    pub(crate) username: String,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn insert_post(&self, input: NewPost) -> Result<Post, DomainError>;

    /// Posts ordered by `created_at` descending, truncated to `limit`.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Post>, DomainError>;

    /// Appends the reply to the post's sequence in one atomic store
    /// operation; a read-modify-write of the whole document would lose
    /// concurrent appends. Returns `false` when no post matched `post_id`.
    async fn push_reply(&self, post_id: i64, reply: &Reply) -> Result<bool, DomainError>;
}
