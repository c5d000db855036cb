//! Credential Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registered user record persisted in the users slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub fullname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record stamped with the current time
    pub fn new(fullname: String, email: String, password: String) -> Self {
        Self {
            fullname,
            email,
            password,
            created_at: Utc::now(),
        }
    }

    /// Check whether this record matches an email, ignoring case
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// Why a registration attempt was refused
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("email is already registered")]
    AlreadyRegistered,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Canonical form of an email address: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
