//! Portal Orchestrator
//!
//! Wires storage, credential store, session manager, and guard, and runs
//! the page-load pipeline in the fixed order: seed the administrator
//! account, evaluate the access guard, then let hydration proceed. A
//! guard redirect short-circuits everything after it on that load.

use crate::config::PortalConfig;
use crate::credentials::CredentialStore;
use crate::forms::{LoginController, RegisterController};
use crate::guard::{AccessGuard, GuardDecision, Navigator};
use crate::session::SessionManager;
use crate::storage::StoragePort;
use crate::Result;
use std::sync::Arc;
use tracing::debug;

/// Result of running the page-load pipeline for one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoad {
    pub page: String,
    pub redirected_to: Option<String>,
}

impl PageLoad {
    /// Whether this load ended in a redirect
    pub fn redirected(&self) -> bool {
        self.redirected_to.is_some()
    }
}

/// The assembled portal core
pub struct Portal {
    config: PortalConfig,
    credentials: CredentialStore,
    sessions: SessionManager,
    guard: AccessGuard,
}

impl Portal {
    /// Assemble the portal over a shared storage port
    pub fn new(config: PortalConfig, storage: Arc<dyn StoragePort>) -> Self {
        let credentials = CredentialStore::new(
            storage.clone(),
            config.storage.users_key.clone(),
            config.policy.password_scheme(),
        );
        let sessions = SessionManager::new(storage, config.storage.session_key.clone());
        let guard = AccessGuard::new(config.pages.clone());

        Self {
            config,
            credentials,
            sessions,
            guard,
        }
    }

    /// Run the page-load pipeline for one navigation
    pub fn load_page(&self, page: &str, nav: &dyn Navigator) -> Result<PageLoad> {
        // Seeding runs on every load, before anything can read users
        self.credentials.ensure_seed_user(&self.config.seed)?;

        match self.guard.evaluate(page, self.sessions.has_valid_session()) {
            GuardDecision::Redirect(target) => {
                nav.redirect_to(&target);
                Ok(PageLoad {
                    page: page.to_string(),
                    redirected_to: Some(target),
                })
            }
            GuardDecision::Proceed => {
                debug!("Page {} initialized", page);
                Ok(PageLoad {
                    page: page.to_string(),
                    redirected_to: None,
                })
            }
        }
    }

    /// Clear the session and return to the public entry page
    pub fn logout(&self, nav: &dyn Navigator) -> Result<()> {
        self.sessions.logout()?;
        nav.redirect_to(&self.config.pages.public_entry);
        Ok(())
    }

    /// Login controller bound to this portal
    pub fn login_controller(&self) -> LoginController<'_> {
        LoginController::new(
            &self.credentials,
            &self.sessions,
            &self.config.policy,
            &self.config.pages.default_interior,
        )
    }

    /// Registration controller bound to this portal
    pub fn register_controller(&self) -> RegisterController<'_> {
        RegisterController::new(
            &self.credentials,
            &self.config.policy,
            &self.config.pages.public_entry,
        )
    }

    /// Credential store accessor
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Session manager accessor
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Access guard accessor
    pub fn guard(&self) -> &AccessGuard {
        &self.guard
    }

    /// Effective configuration
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }
}
