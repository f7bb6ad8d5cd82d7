//! Registration client context provider for Usuarios.
//!
//! Provides the RegistrationClient instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| client);
//!
//! // In child components
//! let client = use_registration_client();
//! ```

use dioxus::prelude::*;
use usuarios_core::RegistrationClient;

/// Hook to access the registration client from context.
///
/// Returns a Signal containing the shared client handle.
pub fn use_registration_client() -> Signal<RegistrationClient> {
    use_context::<Signal<RegistrationClient>>()
}
