use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{ForumClientError, ForumClientResult};
use crate::models::{Identity, Post, Reply, User};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequestDto<'a> {
    username: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequestDto<'a> {
    user_id: &'a str,
    username: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePostRequestDto<'a> {
    title: &'a str,
    content: &'a str,
    author_id: &'a str,
    username: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateReplyRequestDto<'a> {
    content: &'a str,
    author_id: &'a str,
    username: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDto {
    user_id: String,
    username: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    user_id: String,
    username: String,
    created_at: chrono::DateTime<chrono::Utc>,
    last_login: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostDto {
    id: String,
    title: String,
    content: String,
    author_id: String,
    username: String,
    created_at: chrono::DateTime<chrono::Utc>,
    replies: Vec<ReplyDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyDto {
    id: String,
    content: String,
    author_id: String,
    username: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchUserQuery<'a> {
    user_id: &'a str,
}

impl From<SessionDto> for Identity {
    fn from(value: SessionDto) -> Self {
        Self {
            user_id: value.user_id,
            username: value.username,
        }
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self {
            user_id: value.user_id,
            username: value.username,
            created_at: value.created_at,
            last_login: value.last_login,
        }
    }
}

impl From<PostDto> for Post {
    fn from(value: PostDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            author_id: value.author_id,
            username: value.username,
            created_at: value.created_at,
            replies: value.replies.into_iter().map(Reply::from).collect(),
        }
    }
}

impl From<ReplyDto> for Reply {
    fn from(value: ReplyDto) -> Self {
        Self {
            id: value.id,
            content: value.content,
            author_id: value.author_id,
            username: value.username,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP client for the forum server's REST surface.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with the server's base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> ForumClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        ForumClientError::from_http_status(status, Some(message))
    }

    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
    ) -> ForumClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(ForumClientError::from_reqwest)
    }

    /// Registers a new identity; the server picks the 10-digit id.
    pub async fn register(&self, username: &str) -> ForumClientResult<Identity> {
        let payload = RegisterRequestDto { username };
        let dto: SessionDto = self.send_json(Method::POST, "/users", &payload).await?;
        Ok(dto.into())
    }

    /// Logs in with an existing (or freshly invented) 10-digit id.
    pub async fn login(&self, user_id: &str, username: &str) -> ForumClientResult<Identity> {
        let payload = LoginRequestDto { user_id, username };
        let dto: SessionDto = self.send_json(Method::POST, "/session", &payload).await?;
        Ok(dto.into())
    }

    /// Fetches a user profile by id.
    pub async fn fetch_user(&self, user_id: &str) -> ForumClientResult<User> {
        let url = self.endpoint("/users");
        let query = FetchUserQuery { user_id };

        let response = self
            .client
            .request(Method::GET, url)
            .query(&query)
            .send()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dto = response
            .json::<UserDto>()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        Ok(dto.into())
    }

    /// Returns the most recent posts, newest first, at most 50.
    pub async fn list_posts(&self) -> ForumClientResult<Vec<Post>> {
        let url = self.endpoint("/posts");

        let response = self
            .client
            .request(Method::GET, url)
            .send()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dtos = response
            .json::<Vec<PostDto>>()
            .await
            .map_err(ForumClientError::from_reqwest)?;
        Ok(dtos.into_iter().map(Post::from).collect())
    }

    /// Creates a post on behalf of the given identity.
    pub async fn create_post(
        &self,
        identity: &Identity,
        title: &str,
        content: &str,
    ) -> ForumClientResult<Post> {
        let payload = CreatePostRequestDto {
            title,
            content,
            author_id: &identity.user_id,
            username: &identity.username,
        };
        let dto: PostDto = self.send_json(Method::POST, "/posts", &payload).await?;
        Ok(dto.into())
    }

    /// Appends a reply to the given post on behalf of the given identity.
    pub async fn add_reply(
        &self,
        identity: &Identity,
        post_id: &str,
        content: &str,
    ) -> ForumClientResult<Reply> {
        let payload = CreateReplyRequestDto {
            content,
            author_id: &identity.user_id,
            username: &identity.username,
        };
        let dto: ReplyDto = self
            .send_json(Method::POST, &format!("/posts/{post_id}/replies"), &payload)
            .await?;
        Ok(dto.into())
    }
}
