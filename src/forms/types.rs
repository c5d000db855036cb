//! Form Types

use crate::credentials::User;
use crate::session::Session;

/// Generic rejection shown for any credential mismatch
///
/// One message for both unknown email and wrong password, so the form
/// never reveals which records exist.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Try again.";

/// Shown when a registration email already has a record
pub const ALREADY_REGISTERED: &str = "This email is already registered.";

/// Shown before the post-registration redirect to the login page
pub const REGISTRATION_SUCCESS: &str = "Registration successful. Redirecting to login...";

/// Shown against an email field that fails the shape check
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Shown against a confirmation field that does not match
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Password-length message carrying the configured minimum
pub fn password_too_short(min: usize) -> String {
    format!("Password must be at least {} characters", min)
}

/// Full-name-length message carrying the configured minimum
pub fn fullname_too_short(min: usize) -> String {
    format!("Full name must be at least {} characters", min)
}

/// Input fields the controllers validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

/// Rendering contract for field errors and form banners
///
/// "Given a field and a message, mark it invalid" is the whole deal;
/// how that looks on screen is the renderer's business.
pub trait FormRenderer {
    /// Mark a field invalid with an inline message
    fn mark_field_error(&mut self, field: Field, message: &str);

    /// Clear any inline error on a field
    fn clear_field_error(&mut self, field: Field);

    /// Show a form-level banner message
    fn show_form_message(&mut self, message: &str, is_error: bool);

    /// Clear the form-level banner
    fn clear_form_message(&mut self);
}

/// Submitted login form values
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Submitted registration form values
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Outcome of a login submission
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Validation or credential check failed; errors were rendered
    Rejected,
    /// Session established and navigation issued
    Authenticated(Session),
}

/// Outcome of a registration submission
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// Validation failed or the email was taken; errors were rendered
    Rejected,
    /// User persisted and navigation to the login page issued
    Registered(User),
}
