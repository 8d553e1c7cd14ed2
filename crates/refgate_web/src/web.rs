//! Browser entry point and app shell.
//!
//! `RestoreRoute` and `ReferralHandler` are invisible controllers mounted
//! alongside the routed content; neither renders anything and neither
//! interferes with the rest of the page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod bridge;
mod referral;
mod restore;
mod wallet;

use referral::ReferralHandler;
use restore::RestoreRoute;

#[wasm_bindgen(start)]
pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let wallet = wallet::use_wallet();

    view! {
        <Router>
            <RestoreRoute />
            <ReferralHandler wallet=wallet />
            <Routes fallback=|| view! { <p class="subtle">"Page not found"</p> }>
                <Route path=path!("/") view=Home />
            </Routes>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <main class="app-main">
            <h1 class="brand">"Refgate"</h1>
            <p class="subtle">
                "Connect a wallet to get started. Referral links are picked up automatically."
            </p>
        </main>
    }
}
