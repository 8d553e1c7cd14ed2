use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::bridge;

/// Reactive view of the wallet collaborator.
#[derive(Clone, Copy)]
pub(super) struct WalletState {
    pub(super) account: ReadSignal<Option<String>>,
    pub(super) connected: ReadSignal<bool>,
}

/// Seed wallet signals from the bridge and keep them fresh.
///
/// The wallet glue invokes the subscription callback on every account or
/// connectivity change; signals are only written when the value actually
/// changed so dependents do not re-fire spuriously.
pub(super) fn use_wallet() -> WalletState {
    let (account, set_account) = signal(bridge::wallet_account());
    let (connected, set_connected) = signal(bridge::wallet_connected());

    let refresh = move || {
        let next_account = bridge::wallet_account();
        if account.get_untracked() != next_account {
            set_account.set(next_account);
        }
        let next_connected = bridge::wallet_connected();
        if connected.get_untracked() != next_connected {
            set_connected.set(next_connected);
        }
    };

    let cb = Closure::wrap(Box::new(refresh) as Box<dyn FnMut()>);
    bridge::wallet_subscribe(cb.as_ref().unchecked_ref());
    // The subscription lives for the whole page; the closure is never dropped.
    cb.forget();

    WalletState { account, connected }
}
