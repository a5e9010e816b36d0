//! Messaging service orchestrating conversation reads and the send path.
//!
//! MessagingService coordinates between the ConversationRepository and
//! the UserDirectory to list threads, resolve the other participant,
//! collapse unread state on open, and create messages with a
//! deterministic total order.

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use uniconnect_types::conversation::{Conversation, ConversationId};
use uniconnect_types::error::{ConversationError, SendError};
use uniconnect_types::message::{DeliveryStatus, Message, MessageId};
use uniconnect_types::user::{User, UserId};

use crate::chat::repository::ConversationRepository;
use crate::directory::UserDirectory;

/// Orchestrates conversation listing, read-state, and message creation.
///
/// Generic over `ConversationRepository` and `UserDirectory` to maintain
/// clean architecture (uniconnect-core never depends on uniconnect-infra).
pub struct MessagingService<R: ConversationRepository, D: UserDirectory> {
    repo: R,
    directory: D,
}

impl<R: ConversationRepository, D: UserDirectory> MessagingService<R, D> {
    /// Create a new messaging service with the given ports.
    pub fn new(repo: R, directory: D) -> Self {
        Self { repo, directory }
    }

    /// Access the conversation repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Access the user directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    // --- Read views ---

    /// The viewer's conversations, most recent activity first.
    pub async fn list_conversations(
        &self,
        viewer_id: &UserId,
    ) -> Result<Vec<Conversation>, ConversationError> {
        Ok(self.repo.list_for_participant(viewer_id).await?)
    }

    /// The viewer's conversations filtered by a case-insensitive
    /// substring match on the other participant's name. A blank query
    /// returns the full list.
    pub async fn search_conversations(
        &self,
        viewer_id: &UserId,
        query: &str,
    ) -> Result<Vec<Conversation>, ConversationError> {
        let conversations = self.repo.list_for_participant(viewer_id).await?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(conversations);
        }

        let mut matched = Vec::new();
        for conversation in conversations {
            let Some(other_id) = conversation.other_participant(viewer_id) else {
                continue;
            };
            if let Some(user) = self.directory.find_by_id(other_id).await? {
                if user.name.to_lowercase().contains(&query) {
                    matched.push(conversation);
                }
            }
        }
        Ok(matched)
    }

    /// Resolve the participant on the other side of a conversation.
    ///
    /// Errors with `NotFound` for an unknown conversation or an id the
    /// directory cannot resolve, and `NotAParticipant` when the viewer is
    /// not in the pair.
    pub async fn other_participant(
        &self,
        conversation_id: &ConversationId,
        viewer_id: &UserId,
    ) -> Result<User, ConversationError> {
        let conversation = self
            .repo
            .get_conversation(conversation_id)
            .await?
            .ok_or(ConversationError::NotFound)?;
        let other_id = conversation
            .other_participant(viewer_id)
            .ok_or(ConversationError::NotAParticipant)?;
        self.directory
            .find_by_id(other_id)
            .await?
            .ok_or(ConversationError::NotFound)
    }

    /// Open a conversation: the full log in chronological order.
    ///
    /// Side effect: the conversation's unread counter resets to zero.
    /// The reset is viewer-agnostic -- one shared counter per
    /// conversation, valid under the single-local-actor model. Other
    /// conversations are untouched.
    pub async fn open_conversation(
        &self,
        conversation_id: &ConversationId,
        viewer_id: &UserId,
    ) -> Result<Vec<Message>, ConversationError> {
        let conversation = self
            .repo
            .get_conversation(conversation_id)
            .await?
            .ok_or(ConversationError::NotFound)?;
        if !conversation.is_participant(viewer_id) {
            return Err(ConversationError::NotAParticipant);
        }

        let messages = self.repo.get_messages(conversation_id).await?;
        self.repo.reset_unread(conversation_id).await?;
        debug!(
            conversation_id = %conversation_id,
            count = messages.len(),
            "Conversation opened"
        );
        Ok(messages)
    }

    // --- Mutations ---

    /// Create and append a message.
    ///
    /// Validation order: trimmed-empty content, unknown conversation,
    /// sender outside the pair. On success the message carries
    /// `status = Sent` and `sent_at = now` -- unless the clock has not
    /// moved past the latest message, in which case a strictly greater
    /// logical timestamp is assigned so the `(sent_at, seq)` key always
    /// increases. The conversation preview and activity timestamp are
    /// updated; the shared unread counter is not (the sender is the
    /// local viewer).
    pub async fn send_message(
        &self,
        conversation_id: &ConversationId,
        sender_id: &UserId,
        content: &str,
    ) -> Result<Message, SendError> {
        if content.trim().is_empty() {
            return Err(SendError::EmptyContent);
        }

        let mut conversation = self
            .repo
            .get_conversation(conversation_id)
            .await?
            .ok_or(SendError::ConversationNotFound)?;
        if !conversation.is_participant(sender_id) {
            return Err(SendError::NotAParticipant);
        }
        let recipient_id = conversation
            .other_participant(sender_id)
            .cloned()
            .ok_or(SendError::NotAParticipant)?;

        let latest = self.repo.latest_message(conversation_id).await?;
        let now = Utc::now();
        let (sent_at, seq) = match &latest {
            Some(last) if now <= last.sent_at => {
                (last.sent_at + Duration::milliseconds(1), last.seq + 1)
            }
            Some(last) => (now, last.seq + 1),
            None => (now, 0),
        };

        let message = Message {
            id: MessageId::new(),
            conversation_id: conversation_id.clone(),
            sender_id: sender_id.clone(),
            recipient_id,
            content: content.to_string(),
            sent_at,
            seq,
            status: DeliveryStatus::Sent,
            likes: Vec::new(),
        };
        self.repo.append_message(&message).await?;

        conversation.last_message = message.content.clone();
        conversation.last_activity_at = message.sent_at;
        self.repo.update_conversation(&conversation).await?;

        info!(
            conversation_id = %conversation_id,
            message_id = %message.id,
            "Message sent"
        );
        Ok(message)
    }

    /// Apply a delivery or read receipt to a message.
    ///
    /// The status only moves forward; a receipt behind the current
    /// status is ignored, so replayed or out-of-order receipts are
    /// harmless. Returns the message as stored after the call.
    pub async fn apply_delivery_receipt(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
        status: DeliveryStatus,
    ) -> Result<Message, ConversationError> {
        let mut message = self
            .repo
            .get_message(conversation_id, message_id)
            .await?
            .ok_or(ConversationError::MessageNotFound)?;

        let next = message.status.advanced_to(status);
        if next == message.status {
            if status < message.status {
                warn!(
                    message_id = %message_id,
                    current = %message.status,
                    receipt = %status,
                    "Ignoring regressive delivery receipt"
                );
            }
            return Ok(message);
        }

        message.status = next;
        self.repo.update_message(&message).await?;
        debug!(message_id = %message_id, status = %message.status, "Delivery status advanced");
        Ok(message)
    }

    /// Toggle a participant's reaction on a message.
    pub async fn toggle_like(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
        user_id: &UserId,
    ) -> Result<Message, ConversationError> {
        let conversation = self
            .repo
            .get_conversation(conversation_id)
            .await?
            .ok_or(ConversationError::NotFound)?;
        if !conversation.is_participant(user_id) {
            return Err(ConversationError::NotAParticipant);
        }

        let mut message = self
            .repo
            .get_message(conversation_id, message_id)
            .await?
            .ok_or(ConversationError::MessageNotFound)?;
        let liked = message.toggle_like(user_id);
        self.repo.update_message(&message).await?;
        debug!(message_id = %message_id, user_id = %user_id, liked, "Reaction toggled");
        Ok(message)
    }
}
