//! ConversationRepository trait definition.
//!
//! The repository exclusively owns the conversation set and each
//! conversation's message log. Callers never mutate that state directly;
//! every change goes through these methods.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use uniconnect_types::conversation::{Conversation, ConversationId};
use uniconnect_types::error::RepositoryError;
use uniconnect_types::message::{Message, MessageId};
use uniconnect_types::user::UserId;

/// Repository trait for conversation and message state.
///
/// Implementations live in uniconnect-infra (e.g.
/// `InMemoryConversationStore`).
pub trait ConversationRepository: Send + Sync {
    /// Get a conversation by its unique id.
    fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> impl std::future::Future<Output = Result<Option<Conversation>, RepositoryError>> + Send;

    /// List the conversations a user participates in, ordered by
    /// `last_activity_at` descending with a stable tie-break on id
    /// ascending.
    fn list_for_participant(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<Conversation>, RepositoryError>> + Send;

    /// Replace a conversation's metadata (preview, activity, unread).
    fn update_conversation(
        &self,
        conversation: &Conversation,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Reset a conversation's unread counter to zero.
    fn reset_unread(
        &self,
        id: &ConversationId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Full message log in `(sent_at, seq)` order.
    fn get_messages(
        &self,
        id: &ConversationId,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// The newest message by `(sent_at, seq)`, if any.
    fn latest_message(
        &self,
        id: &ConversationId,
    ) -> impl std::future::Future<Output = Result<Option<Message>, RepositoryError>> + Send;

    /// Append a message to its conversation's log.
    fn append_message(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get one message from a conversation's log. Errors with `NotFound`
    /// when the conversation itself is unknown.
    fn get_message(
        &self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
    ) -> impl std::future::Future<Output = Result<Option<Message>, RepositoryError>> + Send;

    /// Replace a message in place (status advance, reaction toggle).
    fn update_message(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
