//! Tests for the file-backed storage state

use authportal::config::PortalConfig;
use authportal::forms::{Field, FormRenderer, LoginForm, LoginOutcome, RegisterForm, RegisterOutcome};
use authportal::guard::Navigator;
use authportal::storage::StoragePort;
use authportal::{FileStorage, Portal};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect_to(&self, page: &str) {
        self.redirects.lock().unwrap().push(page.to_string());
    }
}

struct SilentRenderer;

impl FormRenderer for SilentRenderer {
    fn mark_field_error(&mut self, _field: Field, _message: &str) {}
    fn clear_field_error(&mut self, _field: Field) {}
    fn show_form_message(&mut self, _message: &str, _is_error: bool) {}
    fn clear_form_message(&mut self) {}
}

#[test]
fn test_values_round_trip_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let storage = FileStorage::open(&path);
        storage
            .set("portal_users", "[{\"k\":\"v\"}]".to_string())
            .unwrap();
    }

    let storage = FileStorage::open(&path);
    assert_eq!(
        storage.get("portal_users").as_deref(),
        Some("[{\"k\":\"v\"}]")
    );
}

#[test]
fn test_corrupt_state_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "definitely-not-json").unwrap();

    let storage = FileStorage::open(&path);
    assert_eq!(storage.get("portal_users"), None);

    // Writing repairs the file
    storage.set("portal_session", "{}".to_string()).unwrap();
    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get("portal_session").as_deref(), Some("{}"));
}

#[test]
fn test_remove_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let storage = FileStorage::open(&path);
    storage.set("portal_session", "{}".to_string()).unwrap();
    storage.remove("portal_session").unwrap();

    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get("portal_session"), None);
}

#[tokio::test]
async fn test_full_portal_flow_on_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut config = PortalConfig::default();
    config.policy.redirect_delay = Duration::ZERO;
    config.storage.state_file = path.clone();

    let nav = RecordingNavigator::default();
    let mut renderer = SilentRenderer;

    // First "browser run": register a user
    {
        let portal = Portal::new(config.clone(), Arc::new(FileStorage::open(&path)));
        portal.load_page("register.html", &nav).unwrap();

        let form = RegisterForm {
            fullname: "Ann Example".to_string(),
            email: "Ann@Test.COM".to_string(),
            password: "longpass1".to_string(),
            confirm_password: "longpass1".to_string(),
        };
        let outcome = portal
            .register_controller()
            .submit(&form, &mut renderer, &nav)
            .await
            .unwrap();
        assert!(matches!(outcome, RegisterOutcome::Registered(_)));
    }

    // Second run: log in with the persisted record
    {
        let portal = Portal::new(config.clone(), Arc::new(FileStorage::open(&path)));
        portal.load_page("index.html", &nav).unwrap();

        let form = LoginForm {
            email: "ann@test.com".to_string(),
            password: "longpass1".to_string(),
        };
        let outcome = portal
            .login_controller()
            .submit(&form, &mut renderer, &nav)
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::Authenticated(_)));
    }

    // Third run: the session survives and opens the interior directly
    {
        let portal = Portal::new(config, Arc::new(FileStorage::open(&path)));
        let load = portal.load_page("home.html", &nav).unwrap();
        assert!(!load.redirected());
        assert!(portal.sessions().has_valid_session());
    }
}
