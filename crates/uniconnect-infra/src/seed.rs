//! Seeded demo catalog.
//!
//! The fixed records the client ships with: the user catalog behind the
//! login page, the demo account list displayed there, and John's three
//! direct conversations with their message history. Seeded once at
//! process start; there is no account management at runtime.

use chrono::{DateTime, Duration, Utc};

use uniconnect_types::conversation::{Conversation, ConversationId, ConversationKind};
use uniconnect_types::message::{DeliveryStatus, Message, MessageId};
use uniconnect_types::user::{User, UserId, UserRole};

use crate::memory::conversation::InMemoryConversationStore;
use crate::memory::directory::InMemoryUserDirectory;

/// Password shown next to every demo account. Accepted but never
/// checked -- the catalog carries no credential material.
pub const DEMO_PASSWORD: &str = "demo123";

/// One row of the demo account list on the login page.
pub struct DemoAccount {
    pub email: &'static str,
    pub role: UserRole,
    pub password: &'static str,
}

/// The demo accounts surfaced on the login page.
pub fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            email: "john@university.edu",
            role: UserRole::Student,
            password: DEMO_PASSWORD,
        },
        DemoAccount {
            email: "sarah@university.edu",
            role: UserRole::Alumni,
            password: DEMO_PASSWORD,
        },
        DemoAccount {
            email: "admin@university.edu",
            role: UserRole::Admin,
            password: DEMO_PASSWORD,
        },
    ]
}

/// The seeded catalog: users, their directory, and the conversation
/// store holding John's threads.
pub struct DemoCatalog {
    /// Seed order: John, Sarah, Michael, Alex.
    pub users: Vec<User>,
    pub directory: InMemoryUserDirectory,
    pub conversations: InMemoryConversationStore,
}

/// Build the demo catalog. Timestamps are offsets from seed time.
pub fn demo_catalog() -> DemoCatalog {
    let john = User {
        department: Some("Computer Science".to_string()),
        graduation_year: Some(2025),
        blood_type: Some("A+".to_string()),
        phone: Some("+1234567890".to_string()),
        ..seed_user("John Doe", "john@university.edu", UserRole::Student)
    };
    let sarah = User {
        department: Some("Business Administration".to_string()),
        graduation_year: Some(2020),
        blood_type: Some("O-".to_string()),
        phone: Some("+1234567891".to_string()),
        ..seed_user("Sarah Wilson", "sarah@university.edu", UserRole::Alumni)
    };
    let michael = User {
        department: Some("Administration".to_string()),
        phone: Some("+1234567892".to_string()),
        ..seed_user("Dr. Michael Brown", "admin@university.edu", UserRole::Admin)
    };
    let alex = seed_user("Alex Johnson", "alex@university.edu", UserRole::Student);

    let now = Utc::now();

    let career_thread = Conversation {
        id: ConversationId::new(),
        participants: vec![john.id.clone(), sarah.id.clone()],
        last_message: "Thanks for the career advice!".to_string(),
        last_activity_at: now - Duration::minutes(30),
        unread_count: 2,
        kind: ConversationKind::Direct,
    };
    let career_messages = vec![
        seed_message(
            &career_thread,
            &sarah,
            &john,
            "Hi John! I saw your profile and noticed we both studied Computer Science.",
            now - Duration::minutes(120),
            0,
            DeliveryStatus::Read,
        ),
        seed_message(
            &career_thread,
            &john,
            &sarah,
            "Hi Sarah! Yes, I'm actually graduating next semester. Any advice for someone entering the tech industry?",
            now - Duration::minutes(90),
            1,
            DeliveryStatus::Read,
        ),
        seed_message(
            &career_thread,
            &sarah,
            &john,
            "Absolutely! Focus on building a strong portfolio and networking. I'd be happy to review your resume if you'd like.",
            now - Duration::minutes(60),
            2,
            DeliveryStatus::Read,
        ),
        seed_message(
            &career_thread,
            &john,
            &sarah,
            "That would be amazing! Thank you so much for offering.",
            now - Duration::minutes(45),
            3,
            DeliveryStatus::Read,
        ),
        seed_message(
            &career_thread,
            &sarah,
            &john,
            "Thanks for the career advice!",
            now - Duration::minutes(30),
            4,
            DeliveryStatus::Delivered,
        ),
    ];

    let event_thread = Conversation {
        id: ConversationId::new(),
        participants: vec![john.id.clone(), michael.id.clone()],
        last_message: "Your event proposal has been approved.".to_string(),
        last_activity_at: now - Duration::hours(2),
        unread_count: 0,
        kind: ConversationKind::Direct,
    };
    let event_messages = vec![seed_message(
        &event_thread,
        &michael,
        &john,
        "Your event proposal has been approved.",
        now - Duration::hours(2),
        0,
        DeliveryStatus::Read,
    )];

    let study_thread = Conversation {
        id: ConversationId::new(),
        participants: vec![john.id.clone(), alex.id.clone()],
        last_message: "Are you joining the study group tonight?".to_string(),
        last_activity_at: now - Duration::hours(24),
        unread_count: 1,
        kind: ConversationKind::Direct,
    };
    let study_messages = vec![seed_message(
        &study_thread,
        &alex,
        &john,
        "Are you joining the study group tonight?",
        now - Duration::hours(24),
        0,
        DeliveryStatus::Sent,
    )];

    let users = vec![john, sarah, michael, alex];
    let directory = InMemoryUserDirectory::new(users.clone());
    let conversations = InMemoryConversationStore::with_entries(vec![
        (career_thread, career_messages),
        (event_thread, event_messages),
        (study_thread, study_messages),
    ]);

    DemoCatalog {
        users,
        directory,
        conversations,
    }
}

fn seed_user(name: &str, email: &str, role: UserRole) -> User {
    User {
        id: UserId::new(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        verified: true,
        department: None,
        graduation_year: None,
        blood_type: None,
        phone: None,
        avatar: None,
    }
}

fn seed_message(
    conversation: &Conversation,
    sender: &User,
    recipient: &User,
    content: &str,
    sent_at: DateTime<Utc>,
    seq: u64,
    status: DeliveryStatus,
) -> Message {
    Message {
        id: MessageId::new(),
        conversation_id: conversation.id.clone(),
        sender_id: sender.id.clone(),
        recipient_id: recipient.id.clone(),
        content: content.to_string(),
        sent_at,
        seq,
        status,
        likes: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniconnect_core::chat::service::MessagingService;
    use uniconnect_core::directory::UserDirectory;
    use uniconnect_core::session::service::SessionService;
    use uniconnect_types::error::{ConversationError, SendError};
    use uniconnect_types::session::SessionState;

    use crate::memory::session::InMemorySessionStore;

    fn messaging(
        catalog: &DemoCatalog,
    ) -> MessagingService<InMemoryConversationStore, InMemoryUserDirectory> {
        MessagingService::new(catalog.conversations.clone(), catalog.directory.clone())
    }

    #[tokio::test]
    async fn test_catalog_shape() {
        let catalog = demo_catalog();
        assert_eq!(catalog.users.len(), 4);

        // Every demo account resolves through the directory.
        for account in demo_accounts() {
            let user = catalog
                .directory
                .find_by_email(account.email)
                .await
                .unwrap()
                .expect("demo account missing from catalog");
            assert_eq!(user.role, account.role);
        }

        let john = &catalog.users[0];
        let listed = messaging(&catalog)
            .list_conversations(&john.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 3);

        // Most recent activity first: Sarah (30 min), Michael (2 h), Alex (24 h).
        assert_eq!(listed[0].last_message, "Thanks for the career advice!");
        assert_eq!(
            listed[1].last_message,
            "Your event proposal has been approved."
        );
        assert_eq!(
            listed[2].last_message,
            "Are you joining the study group tonight?"
        );
        assert_eq!(listed[0].unread_count, 2);
        assert_eq!(listed[2].unread_count, 1);
    }

    #[tokio::test]
    async fn test_login_restore_logout_cycle() {
        let catalog = demo_catalog();
        let store = InMemorySessionStore::new();
        let mut service = SessionService::new(catalog.directory.clone(), store.clone());

        service.restore().await;
        assert_eq!(service.current().state(), SessionState::Anonymous);

        let user = service
            .login("john@university.edu", DEMO_PASSWORD)
            .await
            .unwrap();
        assert_eq!(user.name, "John Doe");

        // A restarted service sharing the store restores the session.
        let mut restarted = SessionService::new(catalog.directory.clone(), store.clone());
        restarted.restore().await;
        assert_eq!(
            restarted.current().user().map(|u| u.id.clone()),
            Some(user.id.clone())
        );

        restarted.logout().await.unwrap();

        let mut third = SessionService::new(catalog.directory.clone(), store);
        third.restore().await;
        assert_eq!(third.current().state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_open_conversation_returns_log_and_collapses_unread() {
        let catalog = demo_catalog();
        let service = messaging(&catalog);
        let john = &catalog.users[0];
        let listed = service.list_conversations(&john.id).await.unwrap();
        let career = &listed[0];
        let study = &listed[2];

        let messages = service
            .open_conversation(&career.id, &john.id)
            .await
            .unwrap();
        assert_eq!(messages.len(), 5);
        assert!(messages[0].content.starts_with("Hi John!"));
        assert_eq!(messages[4].content, "Thanks for the career advice!");
        for pair in messages.windows(2) {
            assert!(pair[0].ordering_key() < pair[1].ordering_key());
        }

        // Unread collapsed here, untouched elsewhere.
        let relisted = service.list_conversations(&john.id).await.unwrap();
        assert_eq!(relisted[0].unread_count, 0);
        assert_eq!(relisted[2].unread_count, 1);

        // Opening is idempotent on the log.
        let again = service
            .open_conversation(&career.id, &john.id)
            .await
            .unwrap();
        assert_eq!(again, messages);

        // Outsiders cannot open the thread.
        let alex = &catalog.users[3];
        assert!(matches!(
            service.open_conversation(&career.id, &alex.id).await,
            Err(ConversationError::NotAParticipant)
        ));
        assert!(matches!(
            service
                .open_conversation(&ConversationId::new(), &john.id)
                .await,
            Err(ConversationError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_send_message_appends_and_updates_thread() {
        let catalog = demo_catalog();
        let service = messaging(&catalog);
        let john = &catalog.users[0];
        let sarah = &catalog.users[1];
        let career = service.list_conversations(&john.id).await.unwrap()[0].clone();
        let before = service
            .open_conversation(&career.id, &john.id)
            .await
            .unwrap();

        let sent = service.send_message(&career.id, &john.id, "hi").await.unwrap();
        assert_eq!(sent.sender_id, john.id);
        assert_eq!(sent.recipient_id, sarah.id);
        assert_eq!(sent.status, DeliveryStatus::Sent);
        assert!(sent.ordering_key() > before.last().unwrap().ordering_key());

        let after = service
            .open_conversation(&career.id, &john.id)
            .await
            .unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().unwrap().id, sent.id);

        let relisted = service.list_conversations(&john.id).await.unwrap();
        assert_eq!(relisted[0].id, career.id);
        assert_eq!(relisted[0].last_message, "hi");
        assert_eq!(relisted[0].last_activity_at, sent.sent_at);
        // The sender's own view gains no unread.
        assert_eq!(relisted[0].unread_count, 0);
    }

    #[tokio::test]
    async fn test_send_message_validation() {
        let catalog = demo_catalog();
        let service = messaging(&catalog);
        let john = &catalog.users[0];
        let alex = &catalog.users[3];
        let career = service.list_conversations(&john.id).await.unwrap()[0].clone();

        assert!(matches!(
            service.send_message(&career.id, &john.id, "   ").await,
            Err(SendError::EmptyContent)
        ));
        assert!(matches!(
            service
                .send_message(&ConversationId::new(), &john.id, "hello")
                .await,
            Err(SendError::ConversationNotFound)
        ));
        assert!(matches!(
            service.send_message(&career.id, &alex.id, "hello").await,
            Err(SendError::NotAParticipant)
        ));

        // No partial state: the log is exactly the seeded five messages.
        let messages = service
            .open_conversation(&career.id, &john.id)
            .await
            .unwrap();
        assert_eq!(messages.len(), 5);
    }

    #[tokio::test]
    async fn test_search_conversations_by_participant_name() {
        let catalog = demo_catalog();
        let service = messaging(&catalog);
        let john = &catalog.users[0];

        let hits = service.search_conversations(&john.id, "SARah").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].last_message, "Thanks for the career advice!");

        let all = service.search_conversations(&john.id, "  ").await.unwrap();
        assert_eq!(all.len(), 3);

        let none = service.search_conversations(&john.id, "nobody").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_other_participant_resolution() {
        let catalog = demo_catalog();
        let service = messaging(&catalog);
        let john = &catalog.users[0];
        let alex = &catalog.users[3];
        let career = service.list_conversations(&john.id).await.unwrap()[0].clone();

        let other = service
            .other_participant(&career.id, &john.id)
            .await
            .unwrap();
        assert_eq!(other.name, "Sarah Wilson");

        assert!(matches!(
            service.other_participant(&career.id, &alex.id).await,
            Err(ConversationError::NotAParticipant)
        ));
    }

    #[tokio::test]
    async fn test_delivery_receipts_advance_monotonically() {
        let catalog = demo_catalog();
        let service = messaging(&catalog);
        let john = &catalog.users[0];
        let career = service.list_conversations(&john.id).await.unwrap()[0].clone();
        let messages = service
            .open_conversation(&career.id, &john.id)
            .await
            .unwrap();
        let tail = messages.last().unwrap();
        assert_eq!(tail.status, DeliveryStatus::Delivered);

        let updated = service
            .apply_delivery_receipt(&career.id, &tail.id, DeliveryStatus::Read)
            .await
            .unwrap();
        assert_eq!(updated.status, DeliveryStatus::Read);

        // A late "sent" receipt does not regress the status.
        let replayed = service
            .apply_delivery_receipt(&career.id, &tail.id, DeliveryStatus::Sent)
            .await
            .unwrap();
        assert_eq!(replayed.status, DeliveryStatus::Read);

        assert!(matches!(
            service
                .apply_delivery_receipt(&career.id, &MessageId::new(), DeliveryStatus::Read)
                .await,
            Err(ConversationError::MessageNotFound)
        ));
    }

    #[tokio::test]
    async fn test_toggle_like_requires_participation() {
        let catalog = demo_catalog();
        let service = messaging(&catalog);
        let john = &catalog.users[0];
        let alex = &catalog.users[3];
        let career = service.list_conversations(&john.id).await.unwrap()[0].clone();
        let first = service
            .open_conversation(&career.id, &john.id)
            .await
            .unwrap()[0]
            .clone();

        let liked = service
            .toggle_like(&career.id, &first.id, &john.id)
            .await
            .unwrap();
        assert_eq!(liked.likes, vec![john.id.clone()]);

        let unliked = service
            .toggle_like(&career.id, &first.id, &john.id)
            .await
            .unwrap();
        assert!(unliked.likes.is_empty());

        assert!(matches!(
            service.toggle_like(&career.id, &first.id, &alex.id).await,
            Err(ConversationError::NotAParticipant)
        ));
    }
}
