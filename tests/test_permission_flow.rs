//! Tests for the permission-gated paths through the browser.
//!
//! Contact loading is gated on the read-contacts flow and calling on the
//! call-phone flow. These drive the prompts by key and verify what each
//! resolution unlocks, and that nothing privileged happens before a grant.

mod mocks;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mocks::{MockAdbRunner, MockContactStore};
use std::sync::Arc;
use std::time::{Duration, Instant};
use vibeline::actions::ActionDispatcher;
use vibeline::config::Config;
use vibeline::loader::ContactLoader;
use vibeline::models::ContactRecord;
use vibeline::permissions::Permission;
use vibeline::ui::{App, Overlay, Screen};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn seeded_store() -> MockContactStore {
    let store = MockContactStore::new();
    store.add_record(
        ContactRecord::new(1, "Alice Johnson".to_string(), true),
        &["+15550100"],
    );
    store.add_record(
        ContactRecord::new(2, "Bob Stone".to_string(), true),
        &["+15550101"],
    );
    store
}

/// Build an app with an instant splash and tick it into the browser.
fn browser_app(store: &MockContactStore, adb: &MockAdbRunner) -> App {
    let config = Config {
        splash_duration: Duration::ZERO,
        ..Config::default()
    };
    let loader = ContactLoader::new(Arc::new(store.clone()));
    let dispatcher = ActionDispatcher::new(Arc::new(adb.clone()));
    let mut app = App::new(&config, loader, dispatcher);
    app.on_tick(Instant::now());
    assert_eq!(app.screen, Screen::Browser);
    app
}

#[test]
fn test_read_prompt_appears_on_browser_entry() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let app = browser_app(&store, &adb);

    assert_eq!(
        app.overlay,
        Overlay::PermissionPrompt(Permission::ReadContacts)
    );
    // Nothing is queried while the prompt is pending.
    assert_eq!(store.get_call_count("contact_records"), 0);
}

#[test]
fn test_denying_read_loads_nothing() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let mut app = browser_app(&store, &adb);

    app.handle_key(key(KeyCode::Char('n')));

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.binder.count(), 0);
    assert_eq!(store.get_call_count("contact_records"), 0);
    assert_eq!(app.notice.as_ref().unwrap().message, "Permission denied");
}

#[test]
fn test_granting_read_loads_contacts() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let mut app = browser_app(&store, &adb);

    app.handle_key(key(KeyCode::Char('y')));

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.binder.count(), 2);
    assert_eq!(store.get_call_count("contact_records"), 1);
}

#[test]
fn test_read_flow_resolves_once_per_run() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let mut app = browser_app(&store, &adb);

    app.handle_key(key(KeyCode::Char('y')));
    app.on_tick(Instant::now() + Duration::from_secs(10));
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Up));

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(store.get_call_count("contact_records"), 1);
}

#[test]
fn test_call_prompt_deferred_until_first_call() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let mut app = browser_app(&store, &adb);
    app.handle_key(key(KeyCode::Char('y')));

    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('c')));

    assert_eq!(app.overlay, Overlay::PermissionPrompt(Permission::CallPhone));
    assert_eq!(adb.fire_count(), 0);
}

#[test]
fn test_granting_call_does_not_dial_the_pending_call() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let mut app = browser_app(&store, &adb);
    app.handle_key(key(KeyCode::Char('y')));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('c')));

    app.handle_key(key(KeyCode::Char('y')));

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(adb.fire_count(), 0);
    assert_eq!(
        app.notice.as_ref().unwrap().message,
        "Permission granted for calls"
    );
}

#[test]
fn test_call_after_grant_dispatches_intent() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let mut app = browser_app(&store, &adb);
    app.handle_key(key(KeyCode::Char('y')));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('c')));
    app.handle_key(key(KeyCode::Char('y')));

    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('c')));

    assert_eq!(adb.fire_count(), 1);
    let fires = adb.fires();
    let args: Vec<&str> = fires[0].iter().map(String::as_str).collect();
    assert_eq!(
        args,
        [
            "shell",
            "am",
            "start",
            "-a",
            "android.intent.action.CALL",
            "-d",
            "tel:%2B15550100",
        ]
    );
    assert_eq!(app.notice.as_ref().unwrap().message, "Calling +15550100");
}

#[test]
fn test_denied_call_is_memoized_without_reprompting() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let mut app = browser_app(&store, &adb);
    app.handle_key(key(KeyCode::Char('y')));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('c')));
    app.handle_key(key(KeyCode::Char('n')));

    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('c')));

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(adb.fire_count(), 0);
    assert_eq!(
        app.notice.as_ref().unwrap().message,
        "Call permission denied"
    );
}

#[test]
fn test_messaging_needs_no_permission() {
    let store = seeded_store();
    let adb = MockAdbRunner::new();
    let mut app = browser_app(&store, &adb);
    app.handle_key(key(KeyCode::Char('y')));

    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('m')));

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(adb.fire_count(), 1);
    let fires = adb.fires();
    let args: Vec<&str> = fires[0].iter().map(String::as_str).collect();
    assert_eq!(
        args,
        [
            "shell",
            "am",
            "start",
            "-a",
            "android.intent.action.VIEW",
            "-d",
            "sms:%2B15550100",
        ]
    );
    assert_eq!(app.notice.as_ref().unwrap().message, "Messaging +15550100");
}
