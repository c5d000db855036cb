//! Login Controller

use super::types::{
    password_too_short, Field, FormRenderer, LoginForm, LoginOutcome, INVALID_CREDENTIALS,
    INVALID_EMAIL,
};
use super::validate::is_valid_email;
use crate::config::PolicyConfig;
use crate::credentials::{normalize_email, CredentialStore};
use crate::guard::Navigator;
use crate::session::SessionManager;
use crate::Result;
use tracing::{info, warn};

/// Drives the login form workflow
pub struct LoginController<'a> {
    store: &'a CredentialStore,
    sessions: &'a SessionManager,
    policy: &'a PolicyConfig,
    default_interior: &'a str,
}

impl<'a> LoginController<'a> {
    /// Create a controller over the portal's stores
    pub fn new(
        store: &'a CredentialStore,
        sessions: &'a SessionManager,
        policy: &'a PolicyConfig,
        default_interior: &'a str,
    ) -> Self {
        Self {
            store,
            sessions,
            policy,
            default_interior,
        }
    }

    /// Handle a login submission
    ///
    /// Validation failures abort before any store lookup. A credential
    /// mismatch renders the one generic message regardless of cause.
    pub fn submit(
        &self,
        form: &LoginForm,
        renderer: &mut dyn FormRenderer,
        nav: &dyn Navigator,
    ) -> Result<LoginOutcome> {
        renderer.clear_form_message();

        let email = normalize_email(&form.email);
        let mut is_valid = true;

        if !is_valid_email(&email) {
            renderer.mark_field_error(Field::Email, INVALID_EMAIL);
            is_valid = false;
        } else {
            renderer.clear_field_error(Field::Email);
        }

        if form.password.chars().count() < self.policy.min_password_len {
            renderer.mark_field_error(
                Field::Password,
                &password_too_short(self.policy.min_password_len),
            );
            is_valid = false;
        } else {
            renderer.clear_field_error(Field::Password);
        }

        if !is_valid {
            return Ok(LoginOutcome::Rejected);
        }

        let Some(user) = self.store.verify_credentials(&email, &form.password) else {
            warn!("Rejected login attempt");
            renderer.show_form_message(INVALID_CREDENTIALS, true);
            return Ok(LoginOutcome::Rejected);
        };

        let session = self.sessions.login(&user)?;
        info!("User {} logged in", session.email);
        nav.redirect_to(self.default_interior);
        Ok(LoginOutcome::Authenticated(session))
    }
}
