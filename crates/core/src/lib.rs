//! # refgate
//!
//! Domain logic for a wallet-connected referral front-end: detect a referral
//! candidate in the URL, validate it, check on-chain state, and submit the
//! one `setReferrer` write a session is allowed, plus the startup routine
//! that restores a path saved by an external 404 handler.
//!
//! This crate is platform-neutral. Browser concerns (signals, storage,
//! navigation, the wallet bridge) live in `refgate_web`; everything here is
//! plain values and small collaborator traits, so the guard logic tests
//! natively.
//!
//! ## Quick start
//!
//! ```
//! use refgate::prelude::*;
//!
//! let mut gate = ReferralGate::new();
//! let account = Address::parse("0x1111111111111111111111111111111111111111").unwrap();
//!
//! let snapshot = ReferralSnapshot {
//!     ref_param: Some("0x2222222222222222222222222222222222222222"),
//!     account: Some(account),
//!     connected: true,
//!     referrer_status: ReferrerStatus::NoReferrer,
//! };
//!
//! match gate.evaluate(&snapshot) {
//!     AttemptOutcome::Submitted(call) => assert_eq!(call.function_name, "setReferrer"),
//!     AttemptOutcome::Skipped(reason) => unreachable!("{reason:?}"),
//! }
//!
//! // The latch holds: the same inputs no longer submit.
//! assert_eq!(
//!     gate.evaluate(&snapshot),
//!     AttemptOutcome::Skipped(SkipReason::AlreadyAttempted)
//! );
//! ```
//!
//! ## Modules
//!
//! - [`address`]: account address parsing and comparison
//! - [`contract`]: the referral contract's fixed ABI surface
//! - [`referral`]: the at-most-once attempt controller
//! - [`route`]: redirect-path restoration

pub mod address;
pub mod contract;
pub mod referral;
pub mod route;

pub use address::{Address, AddressParseError};

pub mod prelude {
    pub use crate::address::{Address, AddressParseError};
    pub use crate::contract::{
        has_referrer_call, set_referrer_call, AbiFunction, AbiParam, ContractCall, ContractWriter,
        HAS_REFERRER, REFERRAL_CONTRACT, SET_REFERRER,
    };
    pub use crate::referral::{
        AttemptOutcome, ReferralGate, ReferralSnapshot, ReferrerStatus, SkipReason,
        REF_QUERY_PARAM,
    };
    pub use crate::route::{
        restore_route, take_redirect_path, Navigator, SessionStore, REDIRECT_PATH_KEY,
    };
}
