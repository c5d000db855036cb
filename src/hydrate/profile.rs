//! Profile Hydration

use crate::credentials::CredentialStore;
use crate::session::{Session, SessionManager};
use tracing::debug;

/// Read-only fields shown on the profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub fullname: String,
    pub email: String,
}

/// Header greeting data for interior pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub fullname: String,
    pub token_display: String,
}

/// Resolve profile fields for the current session, if any
///
/// Yields nothing without a valid session or when the session's user
/// record is gone; both cases degrade silently.
pub fn hydrate_profile(
    sessions: &SessionManager,
    store: &CredentialStore,
) -> Option<ProfileFields> {
    let session = sessions.get().filter(Session::is_valid)?;

    let Some(user) = store.find_by_email(&session.email) else {
        debug!("No user record backing the session for {}", session.email);
        return None;
    };

    Some(ProfileFields {
        fullname: user.fullname,
        email: user.email,
    })
}

/// Build the header greeting from the current session, if valid
pub fn session_summary(sessions: &SessionManager) -> Option<SessionSummary> {
    let session = sessions.get().filter(Session::is_valid)?;
    Some(SessionSummary {
        token_display: session.display_token(),
        fullname: session.fullname,
    })
}
