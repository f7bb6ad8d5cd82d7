//! Post-resolution submission report.
//!
//! After a registration attempt resolves, the card writes exactly two
//! messages: the taken branch gets its literal text and the opposite
//! channel is cleared to the empty string. No channel is touched before
//! the attempt resolves. The branching is kept here as a pure function
//! so the workflow is testable without a UI.

use crate::registration::SubmissionResult;
use crate::types::RegistrationRequest;

/// Confirmation text written to the success channel
pub const SUCCESS_MESSAGE: &str = "Usuario registrado con exito";

/// Failure text written to the error channel
pub const ERROR_MESSAGE: &str = "Error al registrar el usuario";

/// Everything the card forwards to its owner after one submit resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Text for the success channel (empty on failure)
    pub success_message: String,
    /// Text for the error channel (empty on success)
    pub error_message: String,
    /// The submitted payload, present only when registration succeeded
    pub registered: Option<RegistrationRequest>,
}

impl SubmissionReport {
    /// Build the report for a resolved attempt.
    ///
    /// On success the registered payload is the submitted request
    /// field-for-field, including whichever role was selected.
    pub fn from_outcome(result: &SubmissionResult, request: &RegistrationRequest) -> Self {
        match result {
            SubmissionResult::Success => Self {
                success_message: SUCCESS_MESSAGE.to_string(),
                error_message: String::new(),
                registered: Some(request.clone()),
            },
            SubmissionResult::Failure(_) => Self {
                success_message: String::new(),
                error_message: ERROR_MESSAGE.to_string(),
                registered: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistrationError;
    use crate::types::UserRole;

    fn request(role: UserRole) -> RegistrationRequest {
        RegistrationRequest {
            username: "testuser".to_string(),
            password: "password123".to_string(),
            email: "test@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_success_report_carries_payload_and_clears_error() {
        let report = SubmissionReport::from_outcome(
            &SubmissionResult::Success,
            &request(UserRole::Admin),
        );
        assert_eq!(report.success_message, SUCCESS_MESSAGE);
        assert_eq!(report.error_message, "");
        assert_eq!(report.registered, Some(request(UserRole::Admin)));
    }

    #[test]
    fn test_failure_report_clears_success_and_drops_payload() {
        let failure =
            SubmissionResult::Failure(RegistrationError::Rejected("duplicate".to_string()));
        let report = SubmissionReport::from_outcome(&failure, &request(UserRole::User));
        assert_eq!(report.error_message, ERROR_MESSAGE);
        assert_eq!(report.success_message, "");
        assert!(report.registered.is_none());
    }
}
