use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct UserUpsert {
    pub(crate) user_id: String,
    pub(crate) username: String,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    /// Single atomic create-or-update keyed by `user_id`.
    ///
    /// Inserts the user with `created_at = last_login = now`; when the id
    /// already exists, rewrites `username` and `last_login` and leaves
    /// `created_at` untouched. Concurrent calls with the same id are
    /// last-writer-wins.
    async fn upsert_user(&self, input: UserUpsert) -> Result<User, DomainError>;

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, DomainError>;
}
