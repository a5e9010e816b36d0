//! SessionStore trait definition.
//!
//! Isolates the persisted-session side effects behind a small port so the
//! session service stays pure state-machine logic and tests run against an
//! in-memory fake.

use uniconnect_types::error::SessionStoreError;
use uniconnect_types::session::StoredSession;

/// Port over the single persisted session record.
///
/// Implementations live in uniconnect-infra (`JsonFileSessionStore` for
/// the real client, `InMemorySessionStore` for tests).
pub trait SessionStore: Send + Sync {
    /// Read the persisted record. Returns `None` when no session is stored.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<StoredSession>, SessionStoreError>> + Send;

    /// Write the persisted record, replacing any previous one.
    fn save(
        &self,
        session: &StoredSession,
    ) -> impl std::future::Future<Output = Result<(), SessionStoreError>> + Send;

    /// Remove the persisted record. No-op when nothing is stored.
    fn clear(
        &self,
    ) -> impl std::future::Future<Output = Result<(), SessionStoreError>> + Send;
}
