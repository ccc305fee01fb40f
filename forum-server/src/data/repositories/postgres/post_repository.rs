use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, Reply};

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author_id: String,
    username: String,
    created_at: DateTime<Utc>,
    replies: Json<Vec<Reply>>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
            username: row.username,
            created_at: row.created_at,
            replies: row.replies.0,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, author_id, username)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author_id, username, created_at, replies
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.author_id)
        .bind(&input.username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(row.into())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, username, created_at, replies
            FROM posts
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn push_reply(&self, post_id: i64, reply: &Reply) -> Result<bool, DomainError> {
        // jsonb || treats the non-array operand as a one-element array, so
        // this is a store-level atomic append on the reply sequence.
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET replies = replies || $2
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .bind(Json(reply))
        .execute(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_post_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Storage(err.to_string())
}
