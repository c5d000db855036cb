//! Access Guard
//!
//! Evaluates the page/session contract once per navigation. Interior
//! pages bounce to the public entry page without a valid session; the
//! entry page bounces to the default interior page with one. The guard
//! runs before any hydration so protected content never flashes.

use crate::config::PagesConfig;
use tracing::{debug, info};

/// Disjoint access categories a page can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Requires a valid session
    Interior,
    /// Login/landing page a valid session is redirected away from
    PublicEntry,
    /// No access rule either way
    Neutral,
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Page initialization may proceed
    Proceed,
    /// Navigation must be redirected; further initialization stops
    Redirect(String),
}

/// Navigation primitive driven by the guard and form controllers
///
/// Implementations end the current page load when invoked; the core
/// never continues past a redirect on its own.
pub trait Navigator {
    /// Navigate the client to another page
    fn redirect_to(&self, page: &str);
}

/// Page-access guard over the static page classification
pub struct AccessGuard {
    pages: PagesConfig,
}

impl AccessGuard {
    /// Create a guard from the configured page sets
    pub fn new(pages: PagesConfig) -> Self {
        Self { pages }
    }

    /// Classify a page into its access category
    ///
    /// Unlisted pages carry no access rule and classify as neutral.
    pub fn classify(&self, page: &str) -> PageCategory {
        if self.pages.interior.iter().any(|p| p == page) {
            PageCategory::Interior
        } else if page == self.pages.public_entry {
            PageCategory::PublicEntry
        } else {
            PageCategory::Neutral
        }
    }

    /// Decide whether a page load proceeds or redirects
    pub fn evaluate(&self, page: &str, session_valid: bool) -> GuardDecision {
        match self.classify(page) {
            PageCategory::Interior if !session_valid => {
                info!("Blocking interior page {} without a session", page);
                GuardDecision::Redirect(self.pages.public_entry.clone())
            }
            PageCategory::PublicEntry if session_valid => {
                debug!("Session already established, leaving entry page");
                GuardDecision::Redirect(self.pages.default_interior.clone())
            }
            _ => GuardDecision::Proceed,
        }
    }

}
