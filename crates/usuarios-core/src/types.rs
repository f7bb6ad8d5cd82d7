//! Core types for the registration workflow

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistrationError;

/// Role assigned to a newly registered user.
///
/// `User` is the baseline role preselected in the card's role selector;
/// `Admin` grants access to the administration pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// The wire/select value for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    /// All roles offered by the role selector, baseline first
    pub fn all() -> &'static [UserRole] {
        &[UserRole::User, UserRole::Admin]
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl FromStr for UserRole {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(RegistrationError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload submitted by the new-user card.
///
/// Field values are taken verbatim at the moment of the save action;
/// no client-side validation is applied before handing the payload to
/// the registration transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: UserRole,
}
