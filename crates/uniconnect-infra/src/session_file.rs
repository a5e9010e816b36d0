//! JSON file session store.
//!
//! The client-side analog of browser local storage: one JSON document at
//! a well-known path holding the persisted session record. Read once at
//! startup, written on login, removed on logout.

use std::io::ErrorKind;
use std::path::PathBuf;

use uniconnect_core::session::store::SessionStore;
use uniconnect_types::error::SessionStoreError;
use uniconnect_types::session::StoredSession;

use crate::paths::resolve_data_dir;

/// File name of the session record inside the data directory.
const SESSION_FILE: &str = "session.json";

/// File-backed implementation of `SessionStore`.
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    /// Create a store writing to the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the default location,
    /// `{data_dir}/session.json`.
    pub fn in_data_dir() -> Self {
        Self::new(resolve_data_dir().join(SESSION_FILE))
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    async fn load(&self) -> Result<Option<StoredSession>, SessionStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let stored = serde_json::from_str(&raw)
                    .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;
                Ok(Some(stored))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }

    async fn save(&self, session: &StoredSession) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionStoreError::Io(e.to_string()))?;
        }
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }
}
