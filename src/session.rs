use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::ApiResult;

/// The logged-in user's bearer token and username.
///
/// At most one session exists per store. Created on successful login,
/// destroyed on logout or account deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Process-wide session persistence, the browser-local-storage analog.
///
/// The session survives restarts via a small JSON file; all reads go through
/// an in-memory copy so authenticated calls never touch the disk. A missing
/// or corrupt file simply means no session. Tokens have no expiry and are
/// never refreshed: a stale token is kept until the server rejects it, and a
/// 401 does not clear the store (the user may retry), matching the original
/// client's behavior.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Opens a store backed by `path`, loading any previously saved session.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = std::fs::read(&path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok());

        Self {
            inner: Arc::new(RwLock::new(session)),
            path: Some(path),
        }
    }

    /// An in-memory store with no backing file. Useful for tests and for
    /// callers that do not want the session to outlive the process.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            path: None,
        }
    }

    /// The current session, if a user is logged in.
    pub fn session(&self) -> Option<Session> {
        self.read().clone()
    }

    /// Username of the logged-in user. `None` means anonymous browsing.
    pub fn username(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.username.clone())
    }

    /// Bearer token of the logged-in user. Read at call time by every
    /// authenticated request, so a rotated token takes effect on the next
    /// call.
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.token.clone())
    }

    /// Replaces the stored session and persists it.
    pub fn set(&self, session: Session) -> ApiResult<()> {
        if let Some(path) = &self.path {
            let json = serde_json::to_vec_pretty(&session).expect("session serializes");
            std::fs::write(path, json)?;
        }
        *self.write() = Some(session);
        Ok(())
    }

    /// Drops the session and removes the backing file. Called on logout and
    /// after account deletion.
    pub fn clear(&self) -> ApiResult<()> {
        if let Some(path) = &self.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        *self.write() = None;
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
