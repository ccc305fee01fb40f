//! Client library for the forum server's HTTP API.
//!
//! Wraps the REST surface in a typed `ForumClient`. After `register` or
//! `login` the client keeps the returned identity (the 10-digit id plus
//! the display name) and supplies it to post/reply mutations, the way a
//! browser keeps the id in local storage.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{ForumClientError, ForumClientResult};
pub use models::{Identity, Post, Reply, User};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Typed client for the forum service.
pub struct ForumClient {
    http_client: HttpClient,
    identity: Option<Identity>,
}

impl ForumClient {
    /// Creates a client pointing at the server's base URL, for example
    /// `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(base_url),
            identity: None,
        }
    }

    /// Installs an identity obtained elsewhere (for example a saved
    /// session file).
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Returns the currently held identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Drops the held identity.
    pub fn clear_identity(&mut self) {
        self.identity = None;
    }

    /// Registers a new identity and stores it in the client.
    pub async fn register(&mut self, username: &str) -> ForumClientResult<Identity> {
        let identity = self.http_client.register(username).await?;
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// Logs in with a 10-digit id and stores the resulting identity in the
    /// client. An unseen id creates a fresh profile server-side.
    pub async fn login(&mut self, user_id: &str, username: &str) -> ForumClientResult<Identity> {
        let identity = self.http_client.login(user_id, username).await?;
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// Fetches a user profile by id.
    pub async fn fetch_user(&self, user_id: &str) -> ForumClientResult<User> {
        self.http_client.fetch_user(user_id).await
    }

    /// Returns the most recent posts (newest first, at most 50).
    pub async fn list_posts(&self) -> ForumClientResult<Vec<Post>> {
        self.http_client.list_posts().await
    }

    /// Creates a post authored by the held identity.
    ///
    /// Requires a stored identity.
    pub async fn create_post(&self, title: &str, content: &str) -> ForumClientResult<Post> {
        let identity = self.require_identity()?;
        self.http_client.create_post(identity, title, content).await
    }

    /// Appends a reply to the given post, authored by the held identity.
    ///
    /// Requires a stored identity.
    pub async fn add_reply(&self, post_id: &str, content: &str) -> ForumClientResult<Reply> {
        let identity = self.require_identity()?;
        self.http_client.add_reply(identity, post_id, content).await
    }

    fn require_identity(&self) -> ForumClientResult<&Identity> {
        self.identity.as_ref().ok_or(ForumClientError::NoIdentity)
    }
}
