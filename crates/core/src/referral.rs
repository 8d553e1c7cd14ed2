//! Referral attempt controller.
//!
//! The UI layer re-runs [`ReferralGate::poll`] on every change to the query
//! string, wallet account, connectivity, or on-chain referrer status. Six
//! ordered guard checks decide whether this evaluation submits the single
//! `setReferrer` write; the gate's owned latch makes the submission
//! at-most-once for the life of the instance, no matter how often the
//! inputs re-fire.

use tracing::{debug, info, warn};

use crate::address::Address;
use crate::contract::{set_referrer_call, ContractCall, ContractWriter};

/// Query-string parameter carrying the referral candidate.
pub const REF_QUERY_PARAM: &str = "ref";

/// On-chain "already has a referrer" read, as known right now.
///
/// `Unknown` covers both a query still in flight and a failed query; either
/// way the read collaborator will re-resolve it and trigger another poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferrerStatus {
    #[default]
    Unknown,
    NoReferrer,
    HasReferrer,
}

impl ReferrerStatus {
    /// Collapse a resolved chain read into a status.
    pub fn resolved(has_referrer: bool) -> Self {
        if has_referrer {
            Self::HasReferrer
        } else {
            Self::NoReferrer
        }
    }

    /// Only a confirmed existing referrer blocks submission; an unresolved
    /// status does not.
    fn blocks_submission(self) -> bool {
        matches!(self, Self::HasReferrer)
    }
}

/// The reactive inputs captured for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ReferralSnapshot<'a> {
    /// Raw `ref` query parameter, if the URL carries one.
    pub ref_param: Option<&'a str>,
    /// Wallet account, if one is known.
    pub account: Option<Address>,
    /// Whether the wallet reports itself connected.
    pub connected: bool,
    pub referrer_status: ReferrerStatus,
}

/// Why an evaluation took no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The latch is already set; this gate has submitted before.
    AlreadyAttempted,
    /// No `ref` parameter in the URL.
    MissingRefParam,
    /// No account known, or the wallet is not connected.
    WalletNotReady,
    /// The candidate is not a syntactically valid address.
    InvalidReferrer,
    /// The candidate is the connected account itself.
    SelfReferral,
    /// The chain confirms an existing referrer.
    AlreadyReferred,
}

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Submitted(ContractCall),
    Skipped(SkipReason),
}

/// One-way latch over the guard checks: `UNATTEMPTED -> ATTEMPTED`, never
/// back. A fresh instance (new page load) starts unattempted.
#[derive(Debug, Default)]
pub struct ReferralGate {
    attempted: bool,
}

impl ReferralGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Run the guard checks against one snapshot of the inputs.
    ///
    /// Checks short-circuit in order; the first failure decides the
    /// [`SkipReason`]. On a full pass the latch is set *before* the
    /// `Submitted` outcome is handed back, so a re-evaluation triggered by
    /// the dispatch itself lands on `AlreadyAttempted`. Never panics and
    /// never returns an error: a malformed candidate is a diagnostic, not a
    /// failure.
    pub fn evaluate(&mut self, snapshot: &ReferralSnapshot<'_>) -> AttemptOutcome {
        if self.attempted {
            return AttemptOutcome::Skipped(SkipReason::AlreadyAttempted);
        }

        let Some(raw_candidate) = snapshot.ref_param else {
            return AttemptOutcome::Skipped(SkipReason::MissingRefParam);
        };

        let Some(account) = snapshot.account else {
            return AttemptOutcome::Skipped(SkipReason::WalletNotReady);
        };
        if !snapshot.connected {
            return AttemptOutcome::Skipped(SkipReason::WalletNotReady);
        }

        let referrer = match Address::parse(raw_candidate) {
            Ok(addr) => addr,
            Err(err) => {
                warn!(candidate = raw_candidate, %err, "invalid referrer address in URL");
                return AttemptOutcome::Skipped(SkipReason::InvalidReferrer);
            }
        };

        // Addresses compare as bytes, so this is case-insensitive.
        if referrer == account {
            debug!(%referrer, "ignoring self-referral");
            return AttemptOutcome::Skipped(SkipReason::SelfReferral);
        }

        if snapshot.referrer_status.blocks_submission() {
            debug!(%account, "account already has a referrer");
            return AttemptOutcome::Skipped(SkipReason::AlreadyReferred);
        }

        // Latch before dispatch.
        self.attempted = true;
        info!(%referrer, "submitting referrer");
        AttemptOutcome::Submitted(set_referrer_call(&referrer))
    }

    /// Evaluate, then hand a `Submitted` call to the writer.
    pub fn poll<W: ContractWriter>(
        &mut self,
        snapshot: &ReferralSnapshot<'_>,
        writer: &W,
    ) -> AttemptOutcome {
        let outcome = self.evaluate(snapshot);
        if let AttemptOutcome::Submitted(call) = &outcome {
            writer.submit(call);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::REFERRAL_CONTRACT;
    use std::cell::RefCell;

    const ACCOUNT: &str = "0xAAaAaAaaAaAaAaaAaAAAAAAAAaaaAaAaAaaAaaAa";
    const REFERRER: &str = "0x1111111111111111111111111111111111111111";

    #[derive(Default)]
    struct RecordingWriter {
        calls: RefCell<Vec<ContractCall>>,
    }

    impl ContractWriter for RecordingWriter {
        fn submit(&self, call: &ContractCall) {
            self.calls.borrow_mut().push(call.clone());
        }
    }

    fn ready_snapshot<'a>(ref_param: Option<&'a str>) -> ReferralSnapshot<'a> {
        ReferralSnapshot {
            ref_param,
            account: Some(Address::parse(ACCOUNT).unwrap()),
            connected: true,
            referrer_status: ReferrerStatus::NoReferrer,
        }
    }

    #[test]
    fn submits_once_with_fixed_call_shape() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        let outcome = gate.poll(&ready_snapshot(Some(REFERRER)), &writer);

        let calls = writer.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].address, REFERRAL_CONTRACT);
        assert_eq!(calls[0].function_name, "setReferrer");
        assert_eq!(calls[0].args, vec![REFERRER.to_string()]);
        assert!(matches!(outcome, AttemptOutcome::Submitted(_)));
        assert!(gate.attempted());
    }

    #[test]
    fn at_most_one_submission_across_re_evaluations() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        // The reactive inputs keep changing after the first pass; the latch
        // must hold even for a brand-new candidate.
        gate.poll(&ready_snapshot(Some(REFERRER)), &writer);
        for _ in 0..5 {
            gate.poll(&ready_snapshot(Some(REFERRER)), &writer);
        }
        let other = "0x3333333333333333333333333333333333333333";
        let outcome = gate.poll(&ready_snapshot(Some(other)), &writer);

        assert_eq!(writer.calls.borrow().len(), 1);
        assert_eq!(
            outcome,
            AttemptOutcome::Skipped(SkipReason::AlreadyAttempted)
        );
    }

    #[test]
    fn missing_ref_param_never_submits() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        for _ in 0..3 {
            let outcome = gate.poll(&ready_snapshot(None), &writer);
            assert_eq!(
                outcome,
                AttemptOutcome::Skipped(SkipReason::MissingRefParam)
            );
        }
        assert!(writer.calls.borrow().is_empty());
        assert!(!gate.attempted());
    }

    #[test]
    fn wallet_must_be_known_and_connected() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        let mut no_account = ready_snapshot(Some(REFERRER));
        no_account.account = None;
        assert_eq!(
            gate.poll(&no_account, &writer),
            AttemptOutcome::Skipped(SkipReason::WalletNotReady)
        );

        let mut disconnected = ready_snapshot(Some(REFERRER));
        disconnected.connected = false;
        assert_eq!(
            gate.poll(&disconnected, &writer),
            AttemptOutcome::Skipped(SkipReason::WalletNotReady)
        );

        assert!(writer.calls.borrow().is_empty());
    }

    #[test]
    fn invalid_candidate_is_a_diagnostic_not_a_submission() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        let outcome = gate.poll(&ready_snapshot(Some("not-an-address")), &writer);

        assert_eq!(
            outcome,
            AttemptOutcome::Skipped(SkipReason::InvalidReferrer)
        );
        assert!(writer.calls.borrow().is_empty());
        // A bad candidate must not consume the session's one attempt.
        assert!(!gate.attempted());
    }

    #[test]
    fn self_referral_is_rejected_case_insensitively() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        // Same account, opposite casing.
        let own = ACCOUNT.to_ascii_lowercase();
        let outcome = gate.poll(&ready_snapshot(Some(&own)), &writer);

        assert_eq!(outcome, AttemptOutcome::Skipped(SkipReason::SelfReferral));
        assert!(writer.calls.borrow().is_empty());
        assert!(!gate.attempted());
    }

    #[test]
    fn confirmed_existing_referrer_blocks() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        let mut snapshot = ready_snapshot(Some(REFERRER));
        snapshot.referrer_status = ReferrerStatus::HasReferrer;

        assert_eq!(
            gate.poll(&snapshot, &writer),
            AttemptOutcome::Skipped(SkipReason::AlreadyReferred)
        );
        assert!(writer.calls.borrow().is_empty());
    }

    #[test]
    fn unresolved_status_does_not_block() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        let mut snapshot = ready_snapshot(Some(REFERRER));
        snapshot.referrer_status = ReferrerStatus::Unknown;

        assert!(matches!(
            gate.poll(&snapshot, &writer),
            AttemptOutcome::Submitted(_)
        ));
        assert_eq!(writer.calls.borrow().len(), 1);
    }

    #[test]
    fn failed_checks_leave_the_gate_open_for_later_inputs() {
        let mut gate = ReferralGate::new();
        let writer = RecordingWriter::default();

        // Typical session: the URL has a ref but the wallet connects late.
        let mut early = ready_snapshot(Some(REFERRER));
        early.account = None;
        early.connected = false;
        gate.poll(&early, &writer);
        assert!(writer.calls.borrow().is_empty());

        // Once everything is in place the submission still happens.
        assert!(matches!(
            gate.poll(&ready_snapshot(Some(REFERRER)), &writer),
            AttemptOutcome::Submitted(_)
        ));
        assert_eq!(writer.calls.borrow().len(), 1);
    }
}
