//! Diagnostic callbacks for the slot search.
//!
//! The search never logs on its own. Callers that want visibility pass an
//! observer; `()` ignores everything and [`TracingObserver`] forwards to `tracing`.

use crate::finder::CandidateSlot;
use crate::interval::BusyInterval;

/// Receives diagnostic events from a running search. Every method defaults to a no-op.
pub trait SearchObserver {
    /// Raw busy intervals were merged into `merged`.
    fn merged(&mut self, raw_count: usize, merged: &[BusyInterval]) {
        let _ = (raw_count, merged);
    }

    /// The finder produced `candidates` (not yet scored).
    fn candidates_found(&mut self, candidates: &[CandidateSlot]) {
        let _ = candidates;
    }

    /// A candidate received its score.
    fn slot_scored(&mut self, slot: &CandidateSlot) {
        let _ = slot;
    }

    /// Ranking finished. `None` means no feasible slot.
    fn slot_selected(&mut self, best: Option<&CandidateSlot>) {
        let _ = best;
    }
}

impl SearchObserver for () {}

/// Forwards search diagnostics to the `tracing` subscriber installed by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn merged(&mut self, raw_count: usize, merged: &[BusyInterval]) {
        tracing::debug!(raw = raw_count, merged = merged.len(), "merged busy intervals");
    }

    fn candidates_found(&mut self, candidates: &[CandidateSlot]) {
        tracing::debug!(count = candidates.len(), "enumerated candidate slots");
    }

    fn slot_scored(&mut self, slot: &CandidateSlot) {
        tracing::trace!(
            start = %slot.start.to_rfc3339(),
            end = %slot.end.to_rfc3339(),
            score = slot.score,
            "scored slot"
        );
    }

    fn slot_selected(&mut self, best: Option<&CandidateSlot>) {
        match best {
            Some(slot) => tracing::info!(
                start = %slot.start.to_rfc3339(),
                end = %slot.end.to_rfc3339(),
                score = slot.score,
                "selected optimal slot"
            ),
            None => tracing::warn!("no available slots found"),
        }
    }
}
