use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::{LoginRequest, RegisterRequest, User};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterDto {
    #[validate(length(min = 3))]
    pub(crate) username: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginDto {
    #[validate(length(equal = 10))]
    pub(crate) user_id: String,
    #[validate(length(min = 3))]
    pub(crate) username: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FetchUserQuery {
    pub(crate) user_id: String,
}

/// What register/login hand back: the bearer id and the display name.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionDto {
    pub(crate) user_id: String,
    pub(crate) username: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    pub(crate) user_id: String,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) last_login: DateTime<Utc>,
}

impl From<User> for SessionDto {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Identity issued", body = SessionDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> AppResult<(StatusCode, Json<SessionDto>)> {
    dto.validate()?;

    let req = RegisterRequest {
        username: dto.username,
    };

    let user = state.directory_service.register(req).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(
        ("userId" = String, Query, description = "10-digit user identifier")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn fetch_user(
    State(state): State<AppState>,
    Query(query): Query<FetchUserQuery>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    let user = state.directory_service.lookup(&query.user_id).await?;
    Ok((StatusCode::OK, Json(user.into())))
}

#[utoipa::path(
    post,
    path = "/session",
    tag = "users",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in (profile created or updated)", body = SessionDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> AppResult<(StatusCode, Json<SessionDto>)> {
    dto.validate()?;

    let req = LoginRequest {
        user_id: dto.user_id,
        username: dto.username,
    };

    let user = state.directory_service.login(req).await?;
    Ok((StatusCode::OK, Json(user.into())))
}
