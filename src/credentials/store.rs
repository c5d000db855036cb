//! Credential Store

use super::password::{self, PasswordScheme};
use super::types::{normalize_email, RegisterError, User};
use crate::config::SeedConfig;
use crate::storage::StoragePort;
use crate::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Manages the registered-users slot
///
/// The slot holds a JSON array of user records keyed by normalized email.
/// Reads never fail: an absent or corrupt slot is treated as "no users".
pub struct CredentialStore {
    storage: Arc<dyn StoragePort>,
    slot: String,
    scheme: PasswordScheme,
}

impl CredentialStore {
    /// Create a store over the given storage slot
    pub fn new(storage: Arc<dyn StoragePort>, slot: String, scheme: PasswordScheme) -> Self {
        Self {
            storage,
            slot,
            scheme,
        }
    }

    /// Read all registered users; an absent or corrupt slot reads as empty
    pub fn list_users(&self) -> Vec<User> {
        let Some(raw) = self.storage.get(&self.slot) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                debug!("Users slot is malformed ({}), treating as empty", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the users slot; last writer wins
    pub fn save_users(&self, users: &[User]) -> Result<()> {
        let raw = serde_json::to_string(users)?;
        self.storage.set(&self.slot, raw)
    }

    /// Ensure the administrator seed account exists
    ///
    /// Idempotent; the case-insensitive check makes it safe to run on
    /// every page load without duplicating the seed.
    pub fn ensure_seed_user(&self, seed: &SeedConfig) -> Result<()> {
        let mut users = self.list_users();
        if users.iter().any(|u| u.matches_email(&seed.email)) {
            return Ok(());
        }

        info!("Seeding administrator account {}", seed.email);
        users.push(User::new(
            seed.fullname.clone(),
            normalize_email(&seed.email),
            password::protect(self.scheme, &seed.password),
        ));
        self.save_users(&users)
    }

    /// Look up a user by email, ignoring case
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.list_users()
            .into_iter()
            .find(|u| u.matches_email(email))
    }

    /// Register a new user
    ///
    /// The normalized email must not collide with an existing record,
    /// compared case-insensitively.
    pub fn register(
        &self,
        fullname: &str,
        email: &str,
        password: &str,
    ) -> std::result::Result<User, RegisterError> {
        let email = normalize_email(email);
        let mut users = self.list_users();

        if users.iter().any(|u| u.matches_email(&email)) {
            return Err(RegisterError::AlreadyRegistered);
        }

        let user = User::new(
            fullname.trim().to_string(),
            email,
            password::protect(self.scheme, password),
        );
        users.push(user.clone());
        self.save_users(&users)?;

        info!("Registered user {}", user.email);
        Ok(user)
    }

    /// Find the user matching both email and password, if any
    pub fn verify_credentials(&self, email: &str, password: &str) -> Option<User> {
        self.find_by_email(email)
            .filter(|u| password::verify(&u.password, password))
    }
}
