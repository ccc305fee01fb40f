use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::identity;

pub(crate) const USERNAME_MIN: usize = 3;
pub(crate) const USERNAME_MAX: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) user_id: String,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) last_login: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(crate) struct RegisterRequest {
    pub(crate) username: String,
}

impl RegisterRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            username: normalize_username(&self.username)?,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LoginRequest {
    pub(crate) user_id: String,
    pub(crate) username: String,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        if !identity::is_valid_user_id(&self.user_id) {
            return Err(DomainError::Validation {
                field: "userId",
                message: "must be exactly 10 digits",
            });
        }
        Ok(Self {
            user_id: self.user_id,
            username: normalize_username(&self.username)?,
        })
    }
}

fn normalize_username(username: &str) -> Result<String, DomainError> {
    let username = username.trim();
    let len = username.chars().count();
    if len < USERNAME_MIN || len > USERNAME_MAX {
        return Err(DomainError::Validation {
            field: "username",
            message: "must be 3..20 chars",
        });
    }
    Ok(username.to_string())
}

#[cfg(test)]
mod tests {
    use super::{DomainError, LoginRequest, RegisterRequest, normalize_username};

    #[test]
    fn username_is_trimmed_and_bounded() {
        assert_eq!(
            normalize_username("  visitor  ").expect("must be valid"),
            "visitor"
        );
        assert!(normalize_username("ab").is_err());
        assert!(normalize_username(&"x".repeat(21)).is_err());
        assert!(normalize_username(&"x".repeat(20)).is_ok());
    }

    #[test]
    fn register_request_applies_username_rules() {
        let validated = RegisterRequest {
            username: "  visitor  ".to_string(),
        }
        .validate()
        .expect("must validate");
        assert_eq!(validated.username, "visitor");

        assert!(
            RegisterRequest {
                username: "ab".to_string(),
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn login_request_rejects_malformed_user_id() {
        for bad in ["", "123", "12345678901", "abcdefghij", "123456789x"] {
            let err = LoginRequest {
                user_id: bad.to_string(),
                username: "visitor".to_string(),
            }
            .validate()
            .expect_err("user id must be rejected");
            match err {
                DomainError::Validation { field, .. } => assert_eq!(field, "userId"),
                _ => panic!("expected DomainError::Validation"),
            }
        }
    }

    #[test]
    fn login_request_accepts_ten_digit_id() {
        let validated = LoginRequest {
            user_id: "0123456789".to_string(),
            username: " visitor ".to_string(),
        }
        .validate()
        .expect("must validate");
        assert_eq!(validated.user_id, "0123456789");
        assert_eq!(validated.username, "visitor");
    }
}
