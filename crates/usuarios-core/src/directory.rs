//! In-memory user directory.
//!
//! Concrete [`RegistrationTransport`] used by the desktop shell and the
//! integration tests. Usernames are unique; a duplicate registration is
//! rejected rather than overwritten.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{RegistrationError, RegistrationResult};
use crate::registration::RegistrationTransport;
use crate::types::RegistrationRequest;

/// Roster of registered users held in memory
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    users: Arc<RwLock<Vec<RegistrationRequest>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all registered users, in registration order
    pub async fn list_users(&self) -> Vec<RegistrationRequest> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl RegistrationTransport for InMemoryDirectory {
    async fn register(&self, request: &RegistrationRequest) -> RegistrationResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == request.username) {
            return Err(RegistrationError::Rejected(format!(
                "username '{}' already exists",
                request.username
            )));
        }
        users.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRole;

    fn request(username: &str) -> RegistrationRequest {
        RegistrationRequest {
            username: username.to_string(),
            password: "password123".to_string(),
            email: format!("{}@example.com", username),
            role: UserRole::default(),
        }
    }

    #[tokio::test]
    async fn test_registration_appends_to_roster() {
        let directory = InMemoryDirectory::new();
        directory.register(&request("ana")).await.unwrap();
        directory.register(&request("luis")).await.unwrap();

        let users = directory.list_users().await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "ana");
        assert_eq!(users[1].username, "luis");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let directory = InMemoryDirectory::new();
        directory.register(&request("ana")).await.unwrap();

        let err = directory.register(&request("ana")).await.unwrap_err();
        assert!(matches!(err, RegistrationError::Rejected(_)));
        assert_eq!(directory.list_users().await.len(), 1);
    }
}
