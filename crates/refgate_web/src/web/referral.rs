use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use wasm_bindgen_futures::spawn_local;

use refgate::prelude::*;

use super::bridge;
use super::wallet::WalletState;

/// Invisible component that detects referral links and submits the
/// session's single `setReferrer` write. Renders nothing.
#[component]
pub(super) fn ReferralHandler(wallet: WalletState) -> impl IntoView {
    let query = use_query_map();
    let gate = StoredValue::new(ReferralGate::new());
    let (referrer_status, set_referrer_status) = signal(ReferrerStatus::Unknown);

    // Re-query `hasReferrer` whenever the account changes. The change
    // invalidates the previous answer immediately; a failed query leaves
    // the status Unknown, which is tolerated.
    Effect::new(move |_| {
        let current = wallet.account.get();
        set_referrer_status.set(ReferrerStatus::Unknown);

        let Some(raw) = current else { return };
        let Ok(player) = Address::parse(&raw) else { return };

        spawn_local(async move {
            match bridge::fetch_has_referrer(&player).await {
                Ok(has) => {
                    // Drop a response that raced an account switch.
                    if wallet.account.get_untracked().as_deref() == Some(raw.as_str()) {
                        set_referrer_status.set(ReferrerStatus::resolved(has));
                    }
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("hasReferrer query failed: {err}").into());
                }
            }
        });
    });

    // Re-run the guard checks on every change to the query string, account,
    // connectivity, or referrer status. The gate's latch keeps the
    // submission at-most-once for this mounted instance.
    Effect::new(move |_| {
        let ref_param = query.with(|q| q.get(REF_QUERY_PARAM));
        let account = wallet.account.get();
        let connected = wallet.connected.get();
        let status = referrer_status.get();

        let snapshot = ReferralSnapshot {
            ref_param: ref_param.as_deref(),
            account: account.as_deref().and_then(|s| Address::parse(s).ok()),
            connected,
            referrer_status: status,
        };

        let mut outcome = None;
        gate.update_value(|g| outcome = Some(g.poll(&snapshot, &bridge::BridgeWriter)));

        match outcome {
            Some(AttemptOutcome::Skipped(SkipReason::InvalidReferrer)) => {
                web_sys::console::warn_1(&"Invalid referrer address in URL".into());
            }
            Some(AttemptOutcome::Skipped(SkipReason::SelfReferral)) => {
                web_sys::console::log_1(&"Cannot refer yourself".into());
            }
            Some(AttemptOutcome::Skipped(SkipReason::AlreadyReferred)) => {
                web_sys::console::log_1(&"User already has a referrer".into());
            }
            _ => {}
        }
    });
}
