//! Session service owning the authentication lifecycle.
//!
//! State machine: `Unresolved -> Restoring -> {Authenticated, Anonymous}`,
//! then `Authenticated <-> Anonymous` via login/logout. All persisted-state
//! side effects go through the injected `SessionStore`; the user catalog is
//! consulted through the injected `UserDirectory`.

use chrono::Utc;
use tracing::{info, warn};

use uniconnect_types::error::AuthError;
use uniconnect_types::session::{Session, StoredSession};
use uniconnect_types::user::User;

use crate::directory::UserDirectory;
use crate::session::store::SessionStore;

/// Owns the current session and its transitions.
///
/// Constructed once per process and threaded to consumers explicitly;
/// there is no ambient global session. Generic over the directory and
/// store ports so tests inject in-memory fakes.
pub struct SessionService<D: UserDirectory, S: SessionStore> {
    directory: D,
    store: S,
    session: Session,
}

impl<D: UserDirectory, S: SessionStore> SessionService<D, S> {
    /// Create a new session service in the `Unresolved` state.
    pub fn new(directory: D, store: S) -> Self {
        Self {
            directory,
            store,
            session: Session::Unresolved,
        }
    }

    /// Access the user directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Read-only snapshot of the current session.
    pub fn current(&self) -> &Session {
        &self.session
    }

    /// Resolve the session from the persisted record.
    ///
    /// Reads the store once; when a record is present and its user id
    /// still resolves through the directory, the session becomes
    /// `Authenticated` with the canonical catalog record and the
    /// restored flag set. Otherwise it becomes `Anonymous`, and a stale
    /// record is cleared. Idempotent: once resolved, further calls
    /// return without effect.
    pub async fn restore(&mut self) {
        if !matches!(self.session, Session::Unresolved) {
            return;
        }
        self.session = Session::Restoring;

        let stored = match self.store.load().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "Failed to read stored session, starting anonymous");
                self.session = Session::Anonymous;
                return;
            }
        };

        let Some(stored) = stored else {
            self.session = Session::Anonymous;
            return;
        };

        match self.directory.find_by_id(&stored.user.id).await {
            Ok(Some(user)) => {
                info!(user_id = %user.id, "Session restored from storage");
                self.session = Session::Authenticated {
                    user,
                    restored_from_storage: true,
                };
            }
            Ok(None) => {
                warn!(user_id = %stored.user.id, "Stored session references an unknown user, clearing");
                if let Err(e) = self.store.clear().await {
                    warn!(error = %e, "Failed to clear stale session record");
                }
                self.session = Session::Anonymous;
            }
            Err(e) => {
                warn!(error = %e, "Directory lookup failed during restore");
                self.session = Session::Anonymous;
            }
        }
    }

    /// Authenticate by email and persist the session.
    ///
    /// The password is accepted as opaque input but not checked against
    /// anything -- the demo catalog carries no credential material, so
    /// access is granted on email match alone. On a miss the session is
    /// left untouched and `InvalidCredentials` is returned.
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<User, AuthError> {
        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let stored = StoredSession {
            user: user.clone(),
            saved_at: Utc::now(),
        };
        self.store.save(&stored).await?;

        info!(user_id = %user.id, role = %user.role, "Logged in");
        self.session = Session::Authenticated {
            user: user.clone(),
            restored_from_storage: false,
        };
        Ok(user)
    }

    /// End the session and erase the persisted record. Idempotent.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        self.store.clear().await?;
        if self.session.is_authenticated() {
            info!("Logged out");
        }
        self.session = Session::Anonymous;
        Ok(())
    }
}
