//! Browser app for the referral front-end.
//!
//! This crate is a no-op stub by default so the workspace builds natively
//! without a wasm toolchain. Enable the real Leptos app with
//! `--features web` on a wasm32 target.

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
