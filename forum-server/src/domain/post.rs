use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;

pub(crate) const TITLE_MAX: usize = 100;
pub(crate) const CONTENT_MAX: usize = 5000;
pub(crate) const REPLY_CONTENT_MAX: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: String,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) replies: Vec<Reply>,
}

/// Embedded in its parent post; append-only, never addressed on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Reply {
    pub(crate) id: Uuid,
    pub(crate) content: String,
    pub(crate) author_id: String,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: String,
    pub(crate) username: String,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        // Length caps apply to the raw input, trimming happens after;
        // a 101-char title is rejected even if it trims down to 100.
        if self.title.chars().count() > TITLE_MAX {
            return Err(DomainError::Validation {
                field: "title",
                message: "too long (max 100 characters)",
            });
        }
        if self.content.chars().count() > CONTENT_MAX {
            return Err(DomainError::Validation {
                field: "content",
                message: "too long (max 5000 characters)",
            });
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation {
                field: "title",
                message: "must not be empty",
            });
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation {
                field: "content",
                message: "must not be empty",
            });
        }
        require_author(&self.author_id, &self.username)?;

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            author_id: self.author_id,
            username: self.username,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CreateReplyRequest {
    pub(crate) content: String,
    pub(crate) author_id: String,
    pub(crate) username: String,
}

impl CreateReplyRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        if self.content.chars().count() > REPLY_CONTENT_MAX {
            return Err(DomainError::Validation {
                field: "content",
                message: "too long (max 1000 characters)",
            });
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation {
                field: "content",
                message: "must not be empty",
            });
        }
        require_author(&self.author_id, &self.username)?;

        Ok(Self {
            content: content.to_string(),
            author_id: self.author_id,
            username: self.username,
        })
    }
}

fn require_author(author_id: &str, username: &str) -> Result<(), DomainError> {
    if author_id.trim().is_empty() {
        return Err(DomainError::Validation {
            field: "authorId",
            message: "must not be empty",
        });
    }
    if username.trim().is_empty() {
        return Err(DomainError::Validation {
            field: "username",
            message: "must not be empty",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CreatePostRequest, CreateReplyRequest, DomainError};

    fn post_request(title: &str, content: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            author_id: "1234567890".to_string(),
            username: "visitor".to_string(),
        }
    }

    #[test]
    fn title_cap_is_checked_before_trimming() {
        let err = post_request(&"t".repeat(101), "content")
            .validate()
            .expect_err("101 chars must be rejected");
        assert_validation_field(err, "title");

        let validated = post_request(&"t".repeat(100), "content")
            .validate()
            .expect("100 chars must pass");
        assert_eq!(validated.title.len(), 100);
    }

    #[test]
    fn content_cap_is_five_thousand() {
        assert!(post_request("title", &"c".repeat(5001)).validate().is_err());
        assert!(post_request("title", &"c".repeat(5000)).validate().is_ok());
    }

    #[test]
    fn post_request_trims_title_and_content() {
        let validated = post_request("  title  ", "  content  ")
            .validate()
            .expect("must validate");
        assert_eq!(validated.title, "title");
        assert_eq!(validated.content, "content");
    }

    #[test]
    fn blank_title_is_rejected_even_when_under_cap() {
        let err = post_request("   ", "content")
            .validate()
            .expect_err("blank title must be rejected");
        assert_validation_field(err, "title");
    }

    #[test]
    fn post_request_requires_author_fields() {
        let mut req = post_request("title", "content");
        req.author_id = String::new();
        assert_validation_field(
            req.validate().expect_err("author id required"),
            "authorId",
        );

        let mut req = post_request("title", "content");
        req.username = "   ".to_string();
        assert_validation_field(req.validate().expect_err("username required"), "username");
    }

    #[test]
    fn reply_content_cap_is_one_thousand() {
        let reply = |content: String| CreateReplyRequest {
            content,
            author_id: "1234567890".to_string(),
            username: "visitor".to_string(),
        };

        assert!(reply("r".repeat(1001)).validate().is_err());
        let validated = reply("r".repeat(1000)).validate().expect("1000 must pass");
        assert_eq!(validated.content.len(), 1000);
    }

    #[test]
    fn reply_request_trims_and_requires_content() {
        let reply = CreateReplyRequest {
            content: "  hello  ".to_string(),
            author_id: "1234567890".to_string(),
            username: "visitor".to_string(),
        };
        assert_eq!(reply.validate().expect("must validate").content, "hello");

        let blank = CreateReplyRequest {
            content: "   ".to_string(),
            author_id: "1234567890".to_string(),
            username: "visitor".to_string(),
        };
        assert_validation_field(blank.validate().expect_err("blank rejected"), "content");
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
