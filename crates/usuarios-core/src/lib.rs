//! Usuarios Core Library
//!
//! Registration workflow behind the admin panel's "Nuevo Usuario" card.
//!
//! ## Overview
//!
//! The core models one registration attempt end to end: the payload
//! collected by the card, the transport contract the attempt is delegated
//! to, and the discriminated result the card branches on. Transports are
//! injected; the workflow never depends on how a registration is actually
//! performed.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use usuarios_core::{
//!     InMemoryDirectory, RegistrationClient, RegistrationRequest, SubmissionReport, UserRole,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = RegistrationClient::new(Arc::new(InMemoryDirectory::new()));
//!
//!     let request = RegistrationRequest {
//!         username: "ana".to_string(),
//!         password: "secreta".to_string(),
//!         email: "ana@example.com".to_string(),
//!         role: UserRole::Admin,
//!     };
//!
//!     let result = client.register_user(&request).await;
//!     let report = SubmissionReport::from_outcome(&result, &request);
//!     println!("{}", report.success_message);
//! }
//! ```

pub mod directory;
pub mod error;
pub mod registration;
pub mod submission;
pub mod types;

// Re-exports
pub use directory::InMemoryDirectory;
pub use error::{RegistrationError, RegistrationResult};
pub use registration::{RegistrationClient, RegistrationTransport, SubmissionResult};
pub use submission::{SubmissionReport, ERROR_MESSAGE, SUCCESS_MESSAGE};
pub use types::{RegistrationRequest, UserRole};
