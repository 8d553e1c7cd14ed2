//! The referral contract's call surface.
//!
//! Calls cross the boundary to the wallet collaborator as JSON: one
//! conventional ABI entry plus `functionName` and string-encoded `args`,
//! the shape contract-write bridges consume directly. The contract address
//! and both function signatures are protocol constants and must not change.

use serde::Serialize;

use crate::address::Address;

/// On-chain referral registry this app talks to.
pub const REFERRAL_CONTRACT: &str = "0x6a001b4D16580e955cdC8e1c4060C348Cf3fe487";

/// One input or output slot of a contract function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbiParam {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// ABI description of a single contract function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbiFunction {
    pub inputs: &'static [AbiParam],
    pub name: &'static str,
    pub outputs: &'static [AbiParam],
    #[serde(rename = "stateMutability")]
    pub state_mutability: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// `hasReferrer(address player) -> bool`, read-only.
pub const HAS_REFERRER: AbiFunction = AbiFunction {
    inputs: &[AbiParam {
        name: "player",
        kind: "address",
    }],
    name: "hasReferrer",
    outputs: &[AbiParam {
        name: "",
        kind: "bool",
    }],
    state_mutability: "view",
    kind: "function",
};

/// `setReferrer(address _referrer)`, state-changing.
pub const SET_REFERRER: AbiFunction = AbiFunction {
    inputs: &[AbiParam {
        name: "_referrer",
        kind: "address",
    }],
    name: "setReferrer",
    outputs: &[],
    state_mutability: "nonpayable",
    kind: "function",
};

/// One ABI-described call, ready for the wallet bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractCall {
    pub address: &'static str,
    pub abi: [AbiFunction; 1],
    #[serde(rename = "functionName")]
    pub function_name: &'static str,
    pub args: Vec<String>,
}

/// Build the `hasReferrer` read for the given player.
pub fn has_referrer_call(player: &Address) -> ContractCall {
    ContractCall {
        address: REFERRAL_CONTRACT,
        abi: [HAS_REFERRER],
        function_name: HAS_REFERRER.name,
        args: vec![player.to_string()],
    }
}

/// Build the `setReferrer` write naming the validated candidate.
pub fn set_referrer_call(referrer: &Address) -> ContractCall {
    ContractCall {
        address: REFERRAL_CONTRACT,
        abi: [SET_REFERRER],
        function_name: SET_REFERRER.name,
        args: vec![referrer.to_string()],
    }
}

/// Submission side of the chain-write collaborator.
///
/// Fire-and-forget: the controller never awaits, retries, or cancels a
/// dispatched call. Confirmation is entirely the implementor's concern.
pub trait ContractWriter {
    fn submit(&self, call: &ContractCall);
}
