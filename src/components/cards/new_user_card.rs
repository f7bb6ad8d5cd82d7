//! New User Card
//!
//! Modal form for registering a user: username, password, email and a
//! role selector. The owner controls visibility; the card only asks to
//! be closed and reports outcomes through the message callbacks.

use dioxus::prelude::*;
use usuarios_core::{RegistrationRequest, SubmissionReport, UserRole};

use crate::hooks::use_register_user;

/// New User Card
///
/// Renders nothing while `is_open` is false. A mousedown on the overlay
/// (outside the card body) invokes `on_close` once; the card body stops
/// propagation, so clicks inside never dismiss. The overlay only exists
/// while the card is open, so no dismiss listener outlives it.
///
/// # Example
///
/// ```rust
/// rsx! {
///     NewUserCard {
///         is_open: show_new_user(),
///         on_close: move |_| show_new_user.set(false),
///         on_register: move |user| roster.write().push(user),
///         on_success_message: move |text| success_message.set(text),
///         on_error_message: move |text| error_message.set(text),
///     }
/// }
/// ```
#[component]
pub fn NewUserCard(
    /// Whether the card is rendered
    is_open: bool,
    /// Callback asking the owner to close the card
    on_close: EventHandler<()>,
    /// Callback invoked once per successful registration with the payload
    on_register: EventHandler<RegistrationRequest>,
    /// Success message channel, cleared to "" on failure
    on_success_message: EventHandler<String>,
    /// Error message channel, cleared to "" on success
    on_error_message: EventHandler<String>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(UserRole::default);
    let mut register = use_register_user();

    let loading = register.loading;
    let request_error = register.error;

    // Fields are snapshotted at click time; both channels are written only
    // after the attempt resolves.
    let handle_save = move |_: MouseEvent| {
        let request = RegistrationRequest {
            username: username(),
            password: password(),
            email: email(),
            role: role(),
        };

        spawn(async move {
            let result = register.register_user(&request).await;
            let report = SubmissionReport::from_outcome(&result, &request);

            on_success_message.call(report.success_message);
            on_error_message.call(report.error_message);

            if let Some(payload) = report.registered {
                on_register.call(payload);
                on_close.call(());
            }
        });
    };

    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onmousedown: move |_| on_close.call(()),

            div {
                class: "new-user-card",
                onmousedown: move |e| e.stop_propagation(),

                h2 { class: "card-title", "Nuevo Usuario" }

                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                    placeholder: "Nombre de usuario",
                    autofocus: true,
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                    placeholder: "Contraseña",
                }

                input {
                    class: "form-input",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                    placeholder: "Correo",
                }

                select {
                    class: "role-select",
                    value: "{role}",
                    onchange: move |e| {
                        if let Ok(selected) = e.value().parse::<UserRole>() {
                            role.set(selected);
                        }
                    },
                    for option_role in UserRole::all() {
                        option { value: "{option_role}", "{option_role}" }
                    }
                }

                if let Some(err) = request_error() {
                    p { class: "error-text", "{err}" }
                }

                div { class: "card-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: handle_save,
                        disabled: loading(),

                        if loading() {
                            "Guardando..."
                        } else {
                            "Guardar"
                        }
                    }
                }
            }
        }
    }
}
