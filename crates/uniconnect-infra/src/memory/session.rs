//! In-memory session store.
//!
//! A pure in-memory stand-in for the persisted session record, used by
//! tests and anywhere durability is not wanted.

use std::sync::Arc;

use tokio::sync::Mutex;

use uniconnect_core::session::store::SessionStore;
use uniconnect_types::error::SessionStoreError;
use uniconnect_types::session::StoredSession;

/// In-memory implementation of `SessionStore`.
///
/// Cloning is cheap -- clones share the same record, so a "restarted"
/// service handed a clone sees what the previous one persisted.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    record: Arc<Mutex<Option<StoredSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<StoredSession>, SessionStoreError> {
        Ok(self.record.lock().await.clone())
    }

    async fn save(&self, session: &StoredSession) -> Result<(), SessionStoreError> {
        *self.record.lock().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        *self.record.lock().await = None;
        Ok(())
    }
}
