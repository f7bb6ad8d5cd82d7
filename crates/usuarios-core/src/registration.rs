//! Registration client and transport contract.
//!
//! The client wraps an injected [`RegistrationTransport`] and converts its
//! `Result` into a [`SubmissionResult`], so callers branch on an explicit
//! tag instead of catching errors. A transport failure never propagates
//! past the client.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{RegistrationError, RegistrationResult};
use crate::types::RegistrationRequest;

/// Contract for the backend that actually performs a registration.
///
/// Implementations live outside the workflow core (HTTP service, database,
/// in-memory directory); the client only cares that exactly one attempt is
/// made per call.
#[async_trait]
pub trait RegistrationTransport: Send + Sync {
    /// Attempt to register one user
    async fn register(&self, request: &RegistrationRequest) -> RegistrationResult<()>;
}

/// Outcome of a single registration attempt.
///
/// Exactly one variant is produced per submit; the card branches on the
/// tag and never inspects both sides.
#[derive(Debug)]
pub enum SubmissionResult {
    /// The user was registered
    Success,
    /// The attempt failed; all failure causes collapse to one user-visible message
    Failure(RegistrationError),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }
}

/// Cheap-to-clone handle over the registration transport.
///
/// `register_user` resolves to a [`SubmissionResult`] in both outcomes;
/// the transport's error is logged and folded into the `Failure` variant.
#[derive(Clone)]
pub struct RegistrationClient {
    transport: Arc<dyn RegistrationTransport>,
}

impl RegistrationClient {
    pub fn new(transport: Arc<dyn RegistrationTransport>) -> Self {
        Self { transport }
    }

    /// Perform one registration attempt with the given payload.
    ///
    /// Never returns an `Err`: both outcomes surface as a resolved
    /// [`SubmissionResult`].
    pub async fn register_user(&self, request: &RegistrationRequest) -> SubmissionResult {
        match self.transport.register(request).await {
            Ok(()) => {
                tracing::info!(username = %request.username, role = %request.role, "user registered");
                SubmissionResult::Success
            }
            Err(err) => {
                tracing::warn!(username = %request.username, error = %err, "registration failed");
                SubmissionResult::Failure(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRole;

    struct AlwaysOk;

    #[async_trait]
    impl RegistrationTransport for AlwaysOk {
        async fn register(&self, _request: &RegistrationRequest) -> RegistrationResult<()> {
            Ok(())
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl RegistrationTransport for AlwaysFails {
        async fn register(&self, _request: &RegistrationRequest) -> RegistrationResult<()> {
            Err(RegistrationError::Transport("connection refused".to_string()))
        }
    }

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            username: "testuser".to_string(),
            password: "password123".to_string(),
            email: "test@example.com".to_string(),
            role: UserRole::default(),
        }
    }

    #[tokio::test]
    async fn test_ok_transport_resolves_success() {
        let client = RegistrationClient::new(Arc::new(AlwaysOk));
        assert!(client.register_user(&request()).await.is_success());
    }

    #[tokio::test]
    async fn test_failing_transport_is_absorbed_into_failure() {
        let client = RegistrationClient::new(Arc::new(AlwaysFails));
        let result = client.register_user(&request()).await;
        assert!(matches!(
            result,
            SubmissionResult::Failure(RegistrationError::Transport(_))
        ));
    }
}
