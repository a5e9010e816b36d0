//! Conversation types for direct messaging.
//!
//! A conversation is a two-party message thread with aggregate metadata:
//! last-message preview, last activity timestamp, and an unread counter
//! for the local viewer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::user::UserId;

/// Unique identifier for a conversation, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub Uuid);

impl ConversationId {
    /// Create a new ConversationId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a ConversationId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConversationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Kind of conversation. Only direct threads are populated today;
/// `Group` is reserved for the group-chat entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    Direct,
    Group,
}

impl fmt::Display for ConversationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationKind::Direct => write!(f, "direct"),
            ConversationKind::Group => write!(f, "group"),
        }
    }
}

impl FromStr for ConversationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(ConversationKind::Direct),
            "group" => Ok(ConversationKind::Group),
            other => Err(format!("invalid conversation kind: '{other}'")),
        }
    }
}

/// A two-party message thread.
///
/// `participants` is an ordered pair fixed at creation; for
/// `ConversationKind::Direct` it holds exactly two distinct user ids.
/// The preview, activity timestamp, and unread counter are updated by
/// message arrival; opening the thread resets `unread_count` to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub participants: Vec<UserId>,
    /// Content of the most recent message, shown in the list view.
    pub last_message: String,
    pub last_activity_at: DateTime<Utc>,
    /// Messages not yet seen by the local viewer. Shared across
    /// participants because one registry instance serves one client.
    pub unread_count: u32,
    pub kind: ConversationKind,
}

impl Conversation {
    pub fn is_participant(&self, user_id: &UserId) -> bool {
        self.participants.contains(user_id)
    }

    /// The participant on the other side of the thread.
    ///
    /// Returns `None` when the viewer is not a participant.
    pub fn other_participant(&self, viewer: &UserId) -> Option<&UserId> {
        if !self.is_participant(viewer) {
            return None;
        }
        self.participants.iter().find(|id| *id != viewer)
    }
}
