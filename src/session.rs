//! Local session bookkeeping: the token/user pair cached between runs.
//!
//! The store is the single source of truth for "is a user logged in". It is
//! written by the auth service on login/registration and cleared either
//! explicitly (logout) or by the HTTP client when the backend answers 401.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::error::Result;
use crate::models::User;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Emitted when the persisted session changes, so a long-lived view can
/// react to an invalidation it did not itself trigger (e.g. a 401 clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Saved,
    Cleared,
}

pub trait SessionStore: Send + Sync {
    /// Persist both halves of the session; observable as all-or-nothing.
    fn save(&self, session: &Session) -> Result<()>;

    /// The cached session, or `None` when either half is missing or does not
    /// parse. Never fails.
    fn load(&self) -> Option<Session>;

    /// The bearer credential alone; cheaper than `load` and enough for
    /// attaching the Authorization header.
    fn token(&self) -> Option<String>;

    /// Remove both halves. Idempotent, best-effort.
    fn clear(&self);

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

// ---------------- File-backed store ----------------

/// Stores the session as two entries under a directory: `token` (the opaque
/// credential) and `user` (serialized profile), written and cleared together.
pub struct FileSessionStore {
    dir: PathBuf,
    events_tx: broadcast::Sender<SessionEvent>,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let (events_tx, _events_rx) = broadcast::channel(16);
        Self {
            dir: dir.into(),
            events_tx,
        }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        // The user half lands first: `is_authenticated` keys off the token,
        // so a session is never observable with a token but no user.
        let user_json = serde_json::to_string(&session.user)?;
        fs::write(self.user_path(), user_json)?;
        fs::write(self.token_path(), &session.token)?;

        let _ = self.events_tx.send(SessionEvent::Saved);
        Ok(())
    }

    fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let raw = fs::read_to_string(self.user_path()).ok()?;

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                tracing::debug!("discarding unparseable cached user: {err}");
                None
            }
        }
    }

    fn token(&self) -> Option<String> {
        fs::read_to_string(self.token_path())
            .ok()
            .filter(|t| !t.is_empty())
    }

    fn clear(&self) {
        let had_session = self.token_path().exists();

        let _ = fs::remove_file(self.token_path());
        let _ = fs::remove_file(self.user_path());

        if had_session {
            let _ = self.events_tx.send(SessionEvent::Cleared);
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }
}

// ---------------- In-memory store ----------------

/// Session store without persistence. Used as a test double and for callers
/// that must not leave credentials on disk.
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
    events_tx: broadcast::Sender<SessionEvent>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        let (events_tx, _events_rx) = broadcast::channel(16);
        Self {
            inner: Mutex::new(None),
            events_tx,
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(session.clone());
        drop(guard);

        let _ = self.events_tx.send(SessionEvent::Saved);
        Ok(())
    }

    fn load(&self) -> Option<Session> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    fn clear(&self) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let had_session = guard.take().is_some();
        drop(guard);

        if had_session {
            let _ = self.events_tx.send(SessionEvent::Cleared);
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }
}
