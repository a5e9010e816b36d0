//! In-memory conversation store.
//!
//! Implements `ConversationRepository` over a concurrent map of
//! per-conversation entries. Each entry owns its conversation metadata
//! and message log; all mutation goes through the repository methods.

use std::sync::Arc;

use dashmap::DashMap;

use uniconnect_core::chat::repository::ConversationRepository;
use uniconnect_types::conversation::{Conversation, ConversationId};
use uniconnect_types::error::RepositoryError;
use uniconnect_types::message::{Message, MessageId};
use uniconnect_types::user::UserId;

/// One conversation's state: metadata plus its message log in insertion
/// order.
struct ConversationEntry {
    conversation: Conversation,
    messages: Vec<Message>,
}

/// In-memory implementation of `ConversationRepository`.
///
/// Cloning is cheap -- clones share the same underlying entries.
#[derive(Clone)]
pub struct InMemoryConversationStore {
    inner: Arc<DashMap<ConversationId, ConversationEntry>>,
}

impl InMemoryConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Create a store pre-populated with conversations and their logs.
    /// Seed-time only; runtime mutation goes through the repository
    /// methods.
    pub fn with_entries(entries: Vec<(Conversation, Vec<Message>)>) -> Self {
        let store = Self::new();
        for (conversation, messages) in entries {
            store.inner.insert(
                conversation.id.clone(),
                ConversationEntry {
                    conversation,
                    messages,
                },
            );
        }
        store
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationRepository for InMemoryConversationStore {
    async fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Ok(self.inner.get(id).map(|entry| entry.conversation.clone()))
    }

    async fn list_for_participant(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Conversation>, RepositoryError> {
        let mut conversations: Vec<Conversation> = self
            .inner
            .iter()
            .filter(|entry| entry.conversation.is_participant(user_id))
            .map(|entry| entry.conversation.clone())
            .collect();
        conversations.sort_by(|a, b| {
            b.last_activity_at
                .cmp(&a.last_activity_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(conversations)
    }

    async fn update_conversation(
        &self,
        conversation: &Conversation,
    ) -> Result<(), RepositoryError> {
        let mut entry = self
            .inner
            .get_mut(&conversation.id)
            .ok_or(RepositoryError::NotFound)?;
        entry.conversation = conversation.clone();
        Ok(())
    }

    async fn reset_unread(&self, id: &ConversationId) -> Result<(), RepositoryError> {
        let mut entry = self.inner.get_mut(id).ok_or(RepositoryError::NotFound)?;
        entry.conversation.unread_count = 0;
        Ok(())
    }

    async fn get_messages(&self, id: &ConversationId) -> Result<Vec<Message>, RepositoryError> {
        let entry = self.inner.get(id).ok_or(RepositoryError::NotFound)?;
        let mut messages = entry.messages.clone();
        messages.sort_by_key(|m| m.ordering_key());
        Ok(messages)
    }

    async fn latest_message(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Message>, RepositoryError> {
        let entry = self.inner.get(id).ok_or(RepositoryError::NotFound)?;
        Ok(entry
            .messages
            .iter()
            .max_by_key(|m| m.ordering_key())
            .cloned())
    }

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError> {
        let mut entry = self
            .inner
            .get_mut(&message.conversation_id)
            .ok_or(RepositoryError::NotFound)?;
        entry.messages.push(message.clone());
        Ok(())
    }

    async fn get_message(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
    ) -> Result<Option<Message>, RepositoryError> {
        let entry = self
            .inner
            .get(conversation_id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(entry
            .messages
            .iter()
            .find(|m| &m.id == message_id)
            .cloned())
    }

    async fn update_message(&self, message: &Message) -> Result<(), RepositoryError> {
        let mut entry = self
            .inner
            .get_mut(&message.conversation_id)
            .ok_or(RepositoryError::NotFound)?;
        let slot = entry
            .messages
            .iter_mut()
            .find(|m| m.id == message.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = message.clone();
        Ok(())
    }
}
