//! Route restoration after a 404 redirect.
//!
//! A not-found handler outside this app stashes the originally requested
//! path under [`REDIRECT_PATH_KEY`] in session storage. On startup we
//! consume it at most once: read, delete, then navigate with `replace` so
//! the back button does not land on the intermediate redirect state.

use tracing::debug;

/// Storage key written by the external not-found handler.
pub const REDIRECT_PATH_KEY: &str = "redirectPath";

/// Session-scoped key/value storage collaborator.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// Client-side navigation collaborator.
pub trait Navigator {
    fn navigate(&self, path: &str, replace: bool);
}

/// Take the saved redirect path, deleting it from storage.
///
/// The delete happens before the path is handed back, so a reload between
/// the read and the navigation cannot replay the redirect.
pub fn take_redirect_path<S: SessionStore>(store: &S) -> Option<String> {
    let path = store.get(REDIRECT_PATH_KEY)?;
    store.remove(REDIRECT_PATH_KEY);
    Some(path)
}

/// Restore the saved path, if any, with a single replacing navigation.
///
/// Returns the path that was restored. No-op when nothing was saved.
pub fn restore_route<S: SessionStore, N: Navigator>(store: &S, nav: &N) -> Option<String> {
    let path = take_redirect_path(store)?;
    debug!(%path, "restoring route saved by the not-found handler");
    nav.navigate(&path, true);
    Some(path)
}
