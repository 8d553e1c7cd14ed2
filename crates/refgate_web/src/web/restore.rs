use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use refgate::route::{restore_route, Navigator, SessionStore};

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Session-scoped storage collaborator over `window.sessionStorage`.
pub(super) struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        session_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(s) = session_storage() {
            let _ = s.remove_item(key);
        }
    }
}

struct RouterNavigator<F> {
    navigate: F,
}

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn navigate(&self, path: &str, replace: bool) {
        (self.navigate)(
            path,
            NavigateOptions {
                replace,
                ..Default::default()
            },
        );
    }
}

/// Invisible component that restores the path stashed by the external 404
/// handler. Renders nothing.
#[component]
pub(super) fn RestoreRoute() -> impl IntoView {
    let navigate = use_navigate();

    // Tracks no signals, so it runs exactly once after the initial render;
    // storage writes later in this mounted lifetime are ignored.
    Effect::new(move |_| {
        let nav = RouterNavigator {
            navigate: navigate.clone(),
        };
        let _ = restore_route(&WebSessionStore, &nav);
    });
}
