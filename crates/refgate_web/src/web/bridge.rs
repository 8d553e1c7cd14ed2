//! JS bridge to the host page's wallet glue.
//!
//! The wallet, the chain-read query, and the chain-write submission are
//! external collaborators. The page exposes them as `refgate*` globals and
//! this module is the only place that touches them. Calls cross the
//! boundary as the JSON encoding of [`ContractCall`].

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use refgate::contract::{has_referrer_call, ContractCall, ContractWriter};
use refgate::Address;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = refgateWalletAccount)]
    fn refgate_wallet_account() -> Option<String>;

    #[wasm_bindgen(js_name = refgateWalletConnected)]
    fn refgate_wallet_connected() -> bool;

    #[wasm_bindgen(js_name = refgateWalletSubscribe)]
    fn refgate_wallet_subscribe(callback: &js_sys::Function);

    #[wasm_bindgen(js_name = refgateReadContract, catch)]
    fn refgate_read_contract(call_json: &str) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_name = refgateWriteContract)]
    fn refgate_write_contract(call_json: &str);
}

pub(super) fn wallet_account() -> Option<String> {
    refgate_wallet_account()
}

pub(super) fn wallet_connected() -> bool {
    refgate_wallet_connected()
}

pub(super) fn wallet_subscribe(callback: &js_sys::Function) {
    refgate_wallet_subscribe(callback);
}

/// Ask the chain whether `player` already has a referrer.
pub(super) async fn fetch_has_referrer(player: &Address) -> Result<bool, String> {
    let call = has_referrer_call(player);
    let json = serde_json::to_string(&call).map_err(|e| format!("encode call: {e}"))?;

    let promise =
        refgate_read_contract(&json).map_err(|_| "bridge: readContract threw".to_string())?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| "bridge: readContract rejected".to_string())?;
    value
        .as_bool()
        .ok_or_else(|| "bridge: expected a boolean result".to_string())
}

/// Chain-write collaborator backed by the page's wallet glue.
pub(super) struct BridgeWriter;

impl ContractWriter for BridgeWriter {
    fn submit(&self, call: &ContractCall) {
        if let Some(referrer) = call.args.first() {
            web_sys::console::log_1(&format!("Setting referrer: {referrer}").into());
        }
        // Intentionally fire-and-forget: signing, broadcast, and
        // confirmation are the wallet's concern.
        if let Ok(json) = serde_json::to_string(call) {
            refgate_write_contract(&json);
        }
    }
}
