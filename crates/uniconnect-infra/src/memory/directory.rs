//! In-memory user directory.

use std::sync::Arc;

use uniconnect_core::directory::UserDirectory;
use uniconnect_types::error::RepositoryError;
use uniconnect_types::user::{User, UserId};

/// Immutable seeded user catalog.
///
/// Lookups are pure; the catalog is fixed at construction. Cloning is
/// cheap -- clones share the same catalog.
#[derive(Clone)]
pub struct InMemoryUserDirectory {
    users: Arc<Vec<User>>,
}

impl InMemoryUserDirectory {
    /// Create a directory over the given catalog, in seed order.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    /// Synchronous view of the catalog, for seed-time wiring.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let email = email.trim();
        Ok(self
            .users
            .iter()
            .find(|u| u.email_matches(email))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.iter().find(|u| &u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniconnect_types::user::UserRole;

    fn catalog() -> Vec<User> {
        vec![
            User {
                id: UserId::new(),
                name: "John Doe".to_string(),
                email: "john@university.edu".to_string(),
                role: UserRole::Student,
                verified: true,
                department: None,
                graduation_year: None,
                blood_type: None,
                phone: None,
                avatar: None,
            },
            User {
                id: UserId::new(),
                name: "Sarah Wilson".to_string(),
                email: "sarah@university.edu".to_string(),
                role: UserRole::Alumni,
                verified: true,
                department: None,
                graduation_year: None,
                blood_type: None,
                phone: None,
                avatar: None,
            },
        ]
    }

    #[tokio::test]
    async fn test_find_by_email_ignores_case_and_whitespace() {
        let directory = InMemoryUserDirectory::new(catalog());

        let found = directory
            .find_by_email("  John@University.EDU ")
            .await
            .unwrap();
        assert_eq!(found.map(|u| u.name), Some("John Doe".to_string()));
    }

    #[tokio::test]
    async fn test_find_by_email_unknown_is_none() {
        let directory = InMemoryUserDirectory::new(catalog());
        let found = directory.find_by_email("nobody@university.edu").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let users = catalog();
        let sarah_id = users[1].id.clone();
        let directory = InMemoryUserDirectory::new(users);

        let found = directory.find_by_id(&sarah_id).await.unwrap();
        assert_eq!(found.map(|u| u.email), Some("sarah@university.edu".to_string()));
        assert!(directory.find_by_id(&UserId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_users_preserves_seed_order() {
        let directory = InMemoryUserDirectory::new(catalog());
        let users = directory.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].name, "Sarah Wilson");
    }
}
