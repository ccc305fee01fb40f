use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::post::{CreatePostRequest, CreateReplyRequest, Post, Reply};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePostDto {
    #[validate(length(min = 1, max = 100))]
    pub(crate) title: String,
    #[validate(length(min = 1, max = 5000))]
    pub(crate) content: String,
    #[validate(length(min = 1))]
    pub(crate) author_id: String,
    #[validate(length(min = 1))]
    pub(crate) username: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateReplyDto {
    #[validate(length(min = 1, max = 1000))]
    pub(crate) content: String,
    #[validate(length(min = 1))]
    pub(crate) author_id: String,
    #[validate(length(min = 1))]
    pub(crate) username: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostDto {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: String,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) replies: Vec<ReplyDto>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReplyDto {
    pub(crate) id: String,
    pub(crate) content: String,
    pub(crate) author_id: String,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            username: post.username,
            created_at: post.created_at,
            replies: post.replies.into_iter().map(ReplyDto::from).collect(),
        }
    }
}

impl From<Reply> for ReplyDto {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id.to_string(),
            content: reply.content,
            author_id: reply.author_id,
            username: reply.username,
            created_at: reply.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "Most recent posts, newest first, at most 50", body = [PostDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state.forum_service.list_recent().await?;
    let posts = posts.into_iter().map(PostDto::from).collect();
    Ok((StatusCode::OK, Json(posts)))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    Json(dto): Json<CreatePostDto>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    dto.validate()?;

    let req = CreatePostRequest {
        title: dto.title,
        content: dto.content,
        author_id: dto.author_id,
        username: dto.username,
    };

    let post = state.forum_service.create_post(req).await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

#[utoipa::path(
    post,
    path = "/posts/{postId}/replies",
    tag = "posts",
    params(
        ("postId" = i64, Path, description = "Parent post id")
    ),
    request_body = CreateReplyDto,
    responses(
        (status = 201, description = "Reply appended", body = ReplyDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_reply(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(dto): Json<CreateReplyDto>,
) -> AppResult<(StatusCode, Json<ReplyDto>)> {
    dto.validate()?;

    let req = CreateReplyRequest {
        content: dto.content,
        author_id: dto.author_id,
        username: dto.username,
    };

    let reply = state.forum_service.add_reply(post_id, req).await?;
    Ok((StatusCode::CREATED, Json(reply.into())))
}
