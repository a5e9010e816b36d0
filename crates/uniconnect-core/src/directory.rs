//! UserDirectory trait definition.
//!
//! The directory is the identity store: pure lookups over the immutable
//! seeded catalog. No side effects, no password involvement.

use uniconnect_types::error::RepositoryError;
use uniconnect_types::user::{User, UserId};

/// Lookup port over the user catalog.
///
/// Implementations live in uniconnect-infra (e.g. `InMemoryUserDirectory`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait UserDirectory: Send + Sync {
    /// Find a user by email, compared case-insensitively after trimming.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Find a user by id.
    fn find_by_id(
        &self,
        id: &UserId,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// All catalog entries, in seed order.
    fn list_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<User>, RepositoryError>> + Send;
}
