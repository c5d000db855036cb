//! Session Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single active authenticated-identity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub token: String,
    #[serde(rename = "loginAt")]
    pub login_at: DateTime<Utc>,
}

impl Session {
    /// A session is valid iff both its email and token are non-empty
    pub fn is_valid(&self) -> bool {
        !self.email.is_empty() && !self.token.is_empty()
    }

    /// Short uppercase token form for display surfaces
    ///
    /// The token itself stays opaque; this is presentation only.
    pub fn display_token(&self) -> String {
        self.token.chars().take(8).collect::<String>().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(email: &str, token: &str) -> Session {
        Session {
            fullname: "Ann Example".to_string(),
            email: email.to_string(),
            token: token.to_string(),
            login_at: Utc::now(),
        }
    }

    #[test]
    fn test_validity_requires_email_and_token() {
        assert!(session("ann@test.com", "c0ffee00").is_valid());
        assert!(!session("", "c0ffee00").is_valid());
        assert!(!session("ann@test.com", "").is_valid());
        assert!(!session("", "").is_valid());
    }

    #[test]
    fn test_display_token_truncates_and_uppercases() {
        let s = session("ann@test.com", "deadbeef00112233");
        assert_eq!(s.display_token(), "DEADBEEF");
    }

    #[test]
    fn test_missing_token_field_deserializes_invalid() {
        // Records written before tokens existed parse, but never validate
        let raw = r#"{"fullname":"Ann","email":"ann@test.com","loginAt":"2026-01-01T00:00:00Z"}"#;
        let s: Session = serde_json::from_str(raw).unwrap();
        assert!(!s.is_valid());
    }
}
