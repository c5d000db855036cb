//! Session Manager

use super::token;
use super::types::Session;
use crate::credentials::User;
use crate::storage::StoragePort;
use crate::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Manages the single active session slot
///
/// Exactly one session exists at a time; login replaces any prior
/// session (last write wins) and logout removes the slot outright.
pub struct SessionManager {
    storage: Arc<dyn StoragePort>,
    slot: String,
}

impl SessionManager {
    /// Create a manager over the given storage slot
    pub fn new(storage: Arc<dyn StoragePort>, slot: String) -> Self {
        Self { storage, slot }
    }

    /// Read the current session; malformed slot data reads as absent
    pub fn get(&self) -> Option<Session> {
        let raw = self.storage.get(&self.slot)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!("Session slot is malformed ({}), treating as absent", e);
                None
            }
        }
    }

    /// Check whether a valid session is currently established
    pub fn has_valid_session(&self) -> bool {
        self.get().map(|s| s.is_valid()).unwrap_or(false)
    }

    /// Establish a session for a user, replacing any prior session
    pub fn login(&self, user: &User) -> Result<Session> {
        let session = Session {
            fullname: user.fullname.clone(),
            email: user.email.clone(),
            token: token::generate(),
            login_at: Utc::now(),
        };
        self.storage
            .set(&self.slot, serde_json::to_string(&session)?)?;

        info!("Session established for {}", session.email);
        Ok(session)
    }

    /// Drop the current session; safe to call when none exists
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(&self.slot)?;
        debug!("Session slot cleared");
        Ok(())
    }
}
