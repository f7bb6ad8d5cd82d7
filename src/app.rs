use std::sync::Arc;

use dioxus::prelude::*;
use usuarios_core::{InMemoryDirectory, RegistrationClient};

use crate::pages::Users;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - User administration page with the registration card
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Users {},
}

/// Root application component.
///
/// Provides global styles, the registration client context, and routing.
#[component]
pub fn App() -> Element {
    // The in-memory directory is the app's registration backend; the card
    // only ever sees the client handle from context.
    let client: Signal<RegistrationClient> =
        use_signal(|| RegistrationClient::new(Arc::new(InMemoryDirectory::new())));

    use_context_provider(|| client);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
