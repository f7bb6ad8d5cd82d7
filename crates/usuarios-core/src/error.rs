//! Error types for the registration workflow

use thiserror::Error;

/// Main error type for registration operations
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The registration backend refused the request (e.g. duplicate username)
    #[error("Registration rejected: {0}")]
    Rejected(String),

    /// The registration backend could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// A role string did not match any known role
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

/// Result type alias using RegistrationError
pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistrationError::Rejected("usuario duplicado".to_string());
        assert_eq!(format!("{}", err), "Registration rejected: usuario duplicado");
    }

    #[test]
    fn test_unknown_role_display() {
        let err = RegistrationError::UnknownRole("superuser".to_string());
        assert_eq!(format!("{}", err), "Unknown role: superuser");
    }
}
