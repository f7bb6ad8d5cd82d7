//! Registration hook for Usuarios components.
//!
//! Wraps the [`RegistrationClient`] from context with reactive request
//! state, mirroring what the card needs for rendering: a loading flag
//! while an attempt is in flight and the display text of the last failure.

use dioxus::prelude::*;
use usuarios_core::{RegistrationClient, RegistrationRequest, SubmissionResult};

use crate::context::use_registration_client;

/// Handle returned by [`use_register_user`].
///
/// Copyable so event handlers can move it into spawned futures. The
/// signals are shared; every copy observes the same request state.
#[derive(Clone, Copy)]
pub struct RegisterUser {
    /// True while a registration attempt is in flight
    pub loading: Signal<bool>,
    /// Display text of the last failure, cleared on success
    pub error: Signal<Option<String>>,
    client: Signal<RegistrationClient>,
}

impl RegisterUser {
    /// Perform one registration attempt.
    ///
    /// Resolves to a discriminated [`SubmissionResult`] in both outcomes;
    /// nothing propagates past this call. The loading flag covers exactly
    /// the in-flight window.
    pub async fn register_user(&mut self, request: &RegistrationRequest) -> SubmissionResult {
        self.loading.set(true);

        let client = (self.client)();
        let result = client.register_user(request).await;

        match &result {
            SubmissionResult::Success => self.error.set(None),
            SubmissionResult::Failure(err) => self.error.set(Some(err.to_string())),
        }
        self.loading.set(false);

        result
    }
}

/// Hook wiring the registration client to per-component request state
pub fn use_register_user() -> RegisterUser {
    let loading = use_signal(|| false);
    let error = use_signal(|| Option::<String>::None);
    let client = use_registration_client();

    RegisterUser {
        loading,
        error,
        client,
    }
}
