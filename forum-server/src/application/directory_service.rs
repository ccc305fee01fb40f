use crate::data::user_repository::{UserRepository, UserUpsert};
use crate::domain::error::DomainError;
use crate::domain::identity;
use crate::domain::user::{LoginRequest, RegisterRequest, User};

pub(crate) struct DirectoryService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> DirectoryService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Issues a fresh identifier and stores the profile. The id is the
    /// only credential the caller will ever hold.
    pub(crate) async fn register(&self, req: RegisterRequest) -> Result<User, DomainError> {
        let req = req.validate()?;

        let user_id = identity::generate_user_id();
        self.repo
            .upsert_user(UserUpsert {
                user_id,
                username: req.username,
            })
            .await
    }

    /// Create-or-update on login: a known id gets its username and
    /// last_login rewritten, an unseen id becomes a new profile with the
    /// client-supplied id. Possession of the id is the whole check.
    pub(crate) async fn login(&self, req: LoginRequest) -> Result<User, DomainError> {
        let req = req.validate()?;

        self.repo
            .upsert_user(UserUpsert {
                user_id: req.user_id,
                username: req.username,
            })
            .await
    }

    pub(crate) async fn lookup(&self, user_id: &str) -> Result<User, DomainError> {
        self.repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user id: {user_id}")))
    }
}
