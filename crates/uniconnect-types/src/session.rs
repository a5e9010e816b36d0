//! Authentication session types for the UniConnect client.
//!
//! The session models the local actor's authentication state: resolved
//! once at startup from the persisted record, then changed only by
//! explicit login/logout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::user::User;

/// Lifecycle state of the authentication session.
///
/// `Unresolved` at process start, `Restoring` while the persisted record
/// is being checked, then either `Authenticated` or `Anonymous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Unresolved,
    Restoring,
    Authenticated,
    Anonymous,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unresolved => write!(f, "unresolved"),
            SessionState::Restoring => write!(f, "restoring"),
            SessionState::Authenticated => write!(f, "authenticated"),
            SessionState::Anonymous => write!(f, "anonymous"),
        }
    }
}

impl FromStr for SessionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unresolved" => Ok(SessionState::Unresolved),
            "restoring" => Ok(SessionState::Restoring),
            "authenticated" => Ok(SessionState::Authenticated),
            "anonymous" => Ok(SessionState::Anonymous),
            other => Err(format!("invalid session state: '{other}'")),
        }
    }
}

/// The current authentication session of the local actor.
///
/// `Authenticated` always carries exactly one user snapshot resolved from
/// the directory catalog, so "a user is present iff authenticated" holds
/// at the type level. At most one user is current at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Unresolved,
    Restoring,
    Authenticated {
        user: User,
        /// Whether this session came from the persisted record rather
        /// than an interactive login. Diagnostic only.
        restored_from_storage: bool,
    },
    Anonymous,
}

impl Session {
    /// The fieldless lifecycle state of this session.
    pub fn state(&self) -> SessionState {
        match self {
            Session::Unresolved => SessionState::Unresolved,
            Session::Restoring => SessionState::Restoring,
            Session::Authenticated { .. } => SessionState::Authenticated,
            Session::Anonymous => SessionState::Anonymous,
        }
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::Unresolved
    }
}

/// The persisted session record.
///
/// One JSON document at a well-known location: written on login, removed
/// on logout, read once at startup by the restore path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: User,
    pub saved_at: DateTime<Utc>,
}
