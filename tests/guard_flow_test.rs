//! Tests for the page-load pipeline: seeding, guarding, hydration

use authportal::config::PortalConfig;
use authportal::guard::Navigator;
use authportal::hydrate;
use authportal::{MemoryStorage, Portal};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to(&self, page: &str) {
        self.redirects.lock().unwrap().push(page.to_string());
    }
}

fn test_portal() -> Portal {
    Portal::new(PortalConfig::default(), Arc::new(MemoryStorage::new()))
}

/// Establish a session as the seed administrator
fn sign_in_admin(portal: &Portal) {
    let admin = portal
        .credentials()
        .find_by_email("admin@example.com")
        .expect("seed admin should exist");
    portal.sessions().login(&admin).unwrap();
}

#[test]
fn test_interior_pages_redirect_without_session() {
    for page in ["home.html", "profile.html", "settings.html", "help.html"] {
        let portal = test_portal();
        let nav = RecordingNavigator::default();

        let load = portal.load_page(page, &nav).unwrap();

        assert!(load.redirected());
        assert_eq!(load.redirected_to.as_deref(), Some("index.html"));
        assert_eq!(nav.redirects(), vec!["index.html"]);
    }
}

#[test]
fn test_entry_page_redirects_with_session() {
    let portal = test_portal();
    let nav = RecordingNavigator::default();

    // First load seeds the store, then the admin signs in
    portal.load_page("index.html", &nav).unwrap();
    sign_in_admin(&portal);

    let load = portal.load_page("index.html", &nav).unwrap();
    assert_eq!(load.redirected_to.as_deref(), Some("home.html"));
}

#[test]
fn test_interior_page_proceeds_with_session() {
    let portal = test_portal();
    let nav = RecordingNavigator::default();

    portal.load_page("index.html", &nav).unwrap();
    sign_in_admin(&portal);

    let load = portal.load_page("home.html", &nav).unwrap();
    assert!(!load.redirected());
    assert!(nav.redirects().is_empty());
}

#[test]
fn test_register_page_never_redirects() {
    let portal = test_portal();
    let nav = RecordingNavigator::default();

    // Without a session
    let load = portal.load_page("register.html", &nav).unwrap();
    assert!(!load.redirected());

    // And with one
    sign_in_admin(&portal);
    let load = portal.load_page("register.html", &nav).unwrap();
    assert!(!load.redirected());
    assert!(nav.redirects().is_empty());
}

#[test]
fn test_seed_user_created_once_across_loads() {
    let portal = test_portal();
    let nav = RecordingNavigator::default();

    portal.load_page("index.html", &nav).unwrap();
    portal.load_page("register.html", &nav).unwrap();
    portal.load_page("home.html", &nav).unwrap();

    let users = portal.credentials().list_users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "admin@example.com");
    assert_eq!(users[0].fullname, "Admin User");
}

#[test]
fn test_logout_clears_session_and_redirects() {
    let portal = test_portal();
    let nav = RecordingNavigator::default();

    portal.load_page("index.html", &nav).unwrap();
    sign_in_admin(&portal);
    assert!(portal.sessions().has_valid_session());

    portal.logout(&nav).unwrap();

    assert!(!portal.sessions().has_valid_session());
    assert_eq!(nav.redirects(), vec!["index.html"]);

    // Logging out again stays quiet
    portal.logout(&nav).unwrap();
    assert!(!portal.sessions().has_valid_session());
}

#[test]
fn test_profile_hydration_follows_session_state() {
    let portal = test_portal();
    let nav = RecordingNavigator::default();

    portal.load_page("index.html", &nav).unwrap();

    // No session, nothing to hydrate
    assert!(hydrate::hydrate_profile(portal.sessions(), portal.credentials()).is_none());

    sign_in_admin(&portal);
    let fields = hydrate::hydrate_profile(portal.sessions(), portal.credentials()).unwrap();
    assert_eq!(fields.fullname, "Admin User");
    assert_eq!(fields.email, "admin@example.com");

    let summary = hydrate::session_summary(portal.sessions()).unwrap();
    assert_eq!(summary.fullname, "Admin User");
    assert_eq!(summary.token_display.len(), 8);

    portal.logout(&nav).unwrap();
    assert!(hydrate::hydrate_profile(portal.sessions(), portal.credentials()).is_none());
}

#[test]
fn test_corrupt_slots_do_not_break_page_loads() {
    let storage = Arc::new(MemoryStorage::new());
    let portal = Portal::new(PortalConfig::default(), storage.clone());
    let nav = RecordingNavigator::default();

    use authportal::storage::StoragePort;
    storage.set("portal_users", "][".to_string()).unwrap();
    storage.set("portal_session", "{oops".to_string()).unwrap();

    // Corrupt users slot reads as empty, so the seed is recreated;
    // corrupt session slot reads as signed out, so home bounces
    let load = portal.load_page("home.html", &nav).unwrap();
    assert_eq!(load.redirected_to.as_deref(), Some("index.html"));
    assert_eq!(portal.credentials().list_users().len(), 1);
}
