//! Registration Controller

use super::types::{
    fullname_too_short, password_too_short, Field, FormRenderer, RegisterForm, RegisterOutcome,
    ALREADY_REGISTERED, INVALID_EMAIL, PASSWORDS_DO_NOT_MATCH, REGISTRATION_SUCCESS,
};
use super::validate::is_valid_email;
use crate::config::PolicyConfig;
use crate::credentials::{normalize_email, CredentialStore, RegisterError};
use crate::guard::Navigator;
use crate::Result;
use tracing::{info, warn};

/// Drives the registration form workflow
pub struct RegisterController<'a> {
    store: &'a CredentialStore,
    policy: &'a PolicyConfig,
    public_entry: &'a str,
}

impl<'a> RegisterController<'a> {
    /// Create a controller over the portal's credential store
    pub fn new(store: &'a CredentialStore, policy: &'a PolicyConfig, public_entry: &'a str) -> Self {
        Self {
            store,
            policy,
            public_entry,
        }
    }

    /// Handle a registration submission
    ///
    /// Every failing field is marked before the submission aborts, so
    /// the user sees all problems at once. Success shows the banner,
    /// waits the configured delay, then navigates to the login page.
    pub async fn submit(
        &self,
        form: &RegisterForm,
        renderer: &mut dyn FormRenderer,
        nav: &dyn Navigator,
    ) -> Result<RegisterOutcome> {
        renderer.clear_form_message();

        let fullname = form.fullname.trim();
        let email = normalize_email(&form.email);
        let mut is_valid = true;

        if fullname.chars().count() < self.policy.min_fullname_len {
            renderer.mark_field_error(
                Field::FullName,
                &fullname_too_short(self.policy.min_fullname_len),
            );
            is_valid = false;
        } else {
            renderer.clear_field_error(Field::FullName);
        }

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

        if form.confirm_password != form.password || form.confirm_password.is_empty() {
            renderer.mark_field_error(Field::ConfirmPassword, PASSWORDS_DO_NOT_MATCH);
            is_valid = false;
        } else {
            renderer.clear_field_error(Field::ConfirmPassword);
        }

        if !is_valid {
            return Ok(RegisterOutcome::Rejected);
        }

        match self.store.register(fullname, &email, &form.password) {
            Ok(user) => {
                info!("Registration accepted for {}", user.email);
                renderer.show_form_message(REGISTRATION_SUCCESS, false);

                // Let the success banner land before leaving the page
                tokio::time::sleep(self.policy.redirect_delay).await;
                nav.redirect_to(self.public_entry);
                Ok(RegisterOutcome::Registered(user))
            }
            Err(RegisterError::AlreadyRegistered) => {
                warn!("Registration rejected: email already registered");
                renderer.show_form_message(ALREADY_REGISTERED, true);
                Ok(RegisterOutcome::Rejected)
            }
            Err(RegisterError::Storage(e)) => Err(e),
        }
    }
}
