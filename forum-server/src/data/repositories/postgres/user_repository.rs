use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::data::user_repository::{UserRepository, UserUpsert};
use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    username: String,
    created_at: DateTime<Utc>,
    last_login: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            username: row.username,
            created_at: row.created_at,
            last_login: row.last_login,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn upsert_user(&self, input: UserUpsert) -> Result<User, DomainError> {
        // created_at and last_login default to the same now() on insert;
        // the conflict arm must not touch created_at.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (user_id, username)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE
            SET username = EXCLUDED.username,
                last_login = now()
            RETURNING user_id, username, created_at, last_login
            "#,
        )
        .bind(&input.user_id)
        .bind(&input.username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.into())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, username, created_at, last_login
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.map(User::from))
    }
}

fn map_user_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Storage(err.to_string())
}
