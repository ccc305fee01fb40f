use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// The bearer identity the client holds after `register`/`login`.
///
/// The 10-digit id is the only credential the forum knows about; whoever
/// holds it can act as this user.
pub struct Identity {
    /// 10-digit user identifier.
    pub user_id: String,
    /// Display name sent with posts and replies.
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Public user profile as stored by the directory.
pub struct User {
    /// 10-digit user identifier.
    pub user_id: String,
    /// Current display name.
    pub username: String,
    /// When the profile was first created (UTC).
    pub created_at: DateTime<Utc>,
    /// When the profile last logged in (UTC).
    pub last_login: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A forum post with its embedded replies, newest-first in listings.
pub struct Post {
    /// Store-assigned post identifier.
    pub id: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author's 10-digit id at creation time.
    pub author_id: String,
    /// Author's display name snapshot at creation time.
    pub username: String,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
    /// Replies in append order.
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A reply embedded in its parent post.
pub struct Reply {
    /// Reply identifier, assigned at creation.
    pub id: String,
    /// Reply body.
    pub content: String,
    /// Author's 10-digit id at creation time.
    pub author_id: String,
    /// Author's display name snapshot at creation time.
    pub username: String,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
}
