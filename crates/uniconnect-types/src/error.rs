use thiserror::Error;

/// Errors from the authentication session lifecycle.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No catalog user matches the supplied email. The session is left
    /// unchanged.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session storage error: {0}")]
    Storage(String),
}

/// Errors from the message send entry point. All are recovered locally:
/// the message is not created and no partial state remains.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("message content is empty")]
    EmptyContent,

    #[error("conversation not found")]
    ConversationNotFound,

    #[error("sender is not a participant in this conversation")]
    NotAParticipant,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from conversation read, open, and reaction paths.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("conversation not found")]
    NotFound,

    #[error("user is not a participant in this conversation")]
    NotAParticipant,

    #[error("message not found")]
    MessageNotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in
/// uniconnect-core). Services map these into the domain enums above.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the persisted session store.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("i/o error: {0}")]
    Io(String),

    #[error("corrupt session record: {0}")]
    Corrupt(String),
}

impl From<RepositoryError> for ConversationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ConversationError::NotFound,
            RepositoryError::Query(msg) => ConversationError::Storage(msg),
        }
    }
}

impl From<RepositoryError> for SendError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => SendError::ConversationNotFound,
            RepositoryError::Query(msg) => SendError::Storage(msg),
        }
    }
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        AuthError::Storage(err.to_string())
    }
}

impl From<SessionStoreError> for AuthError {
    fn from(err: SessionStoreError) -> Self {
        AuthError::Storage(err.to_string())
    }
}
