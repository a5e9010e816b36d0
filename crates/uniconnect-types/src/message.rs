//! Message types and the delivery-status state machine.
//!
//! Messages are totally ordered within a conversation by the composite
//! key `(sent_at, seq)`: chronological order with insertion order as the
//! tie-break, so rendering is deterministic even under identical
//! timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::conversation::ConversationId;
use crate::user::UserId;

/// Unique identifier for a message, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Create a new MessageId using UUID v7 (creation-time orderable).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a MessageId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Delivery progression of a message: sent, then delivered, then read.
///
/// The derived `Ord` reflects the progression, and transitions only move
/// forward -- a status never regresses once advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

impl DeliveryStatus {
    /// The status after applying a receipt for `next`.
    ///
    /// Advances when `next` is further along; otherwise keeps the current
    /// status, so out-of-order or replayed receipts are harmless.
    pub fn advanced_to(self, next: DeliveryStatus) -> DeliveryStatus {
        self.max(next)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::Sent => write!(f, "sent"),
            DeliveryStatus::Delivered => write!(f, "delivered"),
            DeliveryStatus::Read => write!(f, "read"),
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sent" => Ok(DeliveryStatus::Sent),
            "delivered" => Ok(DeliveryStatus::Delivered),
            "read" => Ok(DeliveryStatus::Read),
            other => Err(format!("invalid delivery status: '{other}'")),
        }
    }
}

/// One unit of communication within a conversation.
///
/// Created by the send path, never deleted. `seq` is the insertion
/// sequence within the conversation and breaks `sent_at` ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    /// Non-empty text; validated at the send entry point.
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub seq: u64,
    pub status: DeliveryStatus,
    /// Users who reacted to this message.
    pub likes: Vec<UserId>,
}

impl Message {
    /// The composite ordering key: chronological, insertion order as
    /// tie-break.
    pub fn ordering_key(&self) -> (DateTime<Utc>, u64) {
        (self.sent_at, self.seq)
    }

    /// Toggle a user's reaction. Returns true when the message is liked
    /// after the call.
    pub fn toggle_like(&mut self, user_id: &UserId) -> bool {
        if let Some(pos) = self.likes.iter().position(|id| id == user_id) {
            self.likes.remove(pos);
            false
        } else {
            self.likes.push(user_id.clone());
            true
        }
    }
}
