//! Users page - user administration with the registration card.
//!
//! Owns everything the card treats as external: the visibility flag, the
//! success/error message channels, and the roster of registered users.

use dioxus::prelude::*;
use usuarios_core::RegistrationRequest;

use crate::components::NewUserCard;

/// User administration page.
#[component]
pub fn Users() -> Element {
    let mut show_new_user = use_signal(|| false);
    let mut success_message = use_signal(String::new);
    let mut error_message = use_signal(String::new);
    let mut registered_users = use_signal(Vec::<RegistrationRequest>::new);

    rsx! {
        main { class: "users-page",
            header { class: "page-header",
                h1 { class: "page-title", "Usuarios" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_new_user.set(true),
                    "+ Nuevo"
                }
            }

            if !success_message().is_empty() {
                p { class: "message message-success", "{success_message}" }
            }
            if !error_message().is_empty() {
                p { class: "message message-error", "{error_message}" }
            }

            section { class: "user-list",
                if registered_users().is_empty() {
                    p { class: "empty-note", "No hay usuarios registrados" }
                }
                for user in registered_users() {
                    div { class: "user-row",
                        span { class: "user-name", "{user.username}" }
                        span { class: "user-email", "{user.email}" }
                        span { class: "user-role", "{user.role}" }
                    }
                }
            }

            NewUserCard {
                is_open: show_new_user(),
                on_close: move |_| show_new_user.set(false),
                on_register: move |user: RegistrationRequest| registered_users.write().push(user),
                on_success_message: move |text| success_message.set(text),
                on_error_message: move |text| error_message.set(text),
            }
        }
    }
}
