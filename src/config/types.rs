//! Configuration Types

use crate::credentials::PasswordScheme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Storage slot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub state_file: PathBuf,
    pub partials_dir: PathBuf,
    pub users_key: String,
    pub session_key: String,
}

/// Seed administrator account, ensured on every page load
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

/// Static page classification
///
/// Category membership is configuration, never derived from page
/// content; the three sets must stay disjoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PagesConfig {
    pub interior: Vec<String>,
    pub public_entry: String,
    pub default_interior: String,
    pub neutral: Vec<String>,
}

/// Validation and password policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PolicyConfig {
    pub password_hashing: bool,
    pub min_password_len: usize,
    pub min_fullname_len: usize,
    #[serde(with = "humantime_serde")]
    pub redirect_delay: Duration,
}

impl PolicyConfig {
    /// Storage scheme implied by the hashing toggle
    pub fn password_scheme(&self) -> PasswordScheme {
        if self.password_hashing {
            PasswordScheme::SaltedSha256
        } else {
            PasswordScheme::Plain
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("portal_state.json"),
            partials_dir: PathBuf::from("partials"),
            users_key: "portal_users".to_string(),
            session_key: "portal_session".to_string(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            fullname: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            interior: vec![
                "home.html".to_string(),
                "profile.html".to_string(),
                "settings.html".to_string(),
                "help.html".to_string(),
            ],
            public_entry: "index.html".to_string(),
            default_interior: "home.html".to_string(),
            neutral: vec!["register.html".to_string()],
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            password_hashing: false,
            min_password_len: 8,
            min_fullname_len: 3,
            redirect_delay: Duration::from_millis(1200),
        }
    }
}
