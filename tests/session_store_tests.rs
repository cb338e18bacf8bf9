use std::fs;

use stockwatch::models::User;
use stockwatch::session::{
    FileSessionStore, MemorySessionStore, Session, SessionEvent, SessionStore,
};
use tempfile::TempDir;

fn session(token: &str) -> Session {
    Session {
        token: token.to_string(),
        user: User {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        },
    }
}

#[test]
fn save_then_load_returns_the_same_pair() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    store.save(&session("tok-1")).unwrap();

    assert_eq!(store.load(), Some(session("tok-1")));
    assert_eq!(store.token().as_deref(), Some("tok-1"));
    assert!(store.is_authenticated());
}

#[test]
fn load_is_absent_before_any_save() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    assert_eq!(store.load(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn save_overwrites_the_previous_session() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    store.save(&session("tok-1")).unwrap();
    store.save(&session("tok-2")).unwrap();

    assert_eq!(store.load(), Some(session("tok-2")));
}

#[test]
fn load_fails_safe_when_only_the_token_is_present() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    fs::write(dir.path().join("token"), "tok-1").unwrap();

    assert_eq!(store.load(), None);
}

#[test]
fn load_fails_safe_when_only_the_user_is_present() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    fs::write(
        dir.path().join("user"),
        r#"{"username":"alice","email":"alice@example.com"}"#,
    )
    .unwrap();

    assert_eq!(store.load(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn load_fails_safe_on_an_unparseable_user() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    fs::write(dir.path().join("token"), "tok-1").unwrap();
    fs::write(dir.path().join("user"), "definitely not json").unwrap();

    assert_eq!(store.load(), None);
}

#[test]
fn clear_empties_the_store_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    store.save(&session("tok-1")).unwrap();
    store.clear();

    assert_eq!(store.load(), None);
    assert!(!store.is_authenticated());

    // second clear must not fail
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn subscribers_see_saves_and_clears() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());
    let mut events = store.subscribe();

    store.save(&session("tok-1")).unwrap();
    store.clear();

    assert_eq!(events.try_recv().unwrap(), SessionEvent::Saved);
    assert_eq!(events.try_recv().unwrap(), SessionEvent::Cleared);
}

#[test]
fn clearing_an_empty_store_emits_nothing() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());
    let mut events = store.subscribe();

    store.clear();

    assert!(events.try_recv().is_err());
}

#[test]
fn memory_store_behaves_like_the_file_store() {
    let store = MemorySessionStore::new();
    let mut events = store.subscribe();

    assert_eq!(store.load(), None);

    store.save(&session("tok-1")).unwrap();
    assert_eq!(store.load(), Some(session("tok-1")));
    assert!(store.is_authenticated());

    store.clear();
    assert_eq!(store.load(), None);
    assert!(!store.is_authenticated());

    assert_eq!(events.try_recv().unwrap(), SessionEvent::Saved);
    assert_eq!(events.try_recv().unwrap(), SessionEvent::Cleared);
}
