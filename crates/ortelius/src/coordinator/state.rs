//! Pure transition core of the search coordinator.
//!
//! No I/O and no clocks: [`submit`](CoordinatorState::submit) and
//! [`drain_pending`](CoordinatorState::drain_pending) return the query that
//! must now be dispatched, if any, and the surrounding task performs the
//! fetch. That keeps every sequencing rule testable without a runtime.

use crate::candidate::Candidate;

/// Lifecycle position of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No request outstanding.
    Idle,
    /// One request outstanding, nothing queued behind it.
    InFlight,
    /// One request outstanding and one query queued behind it.
    InFlightWithPending,
}

/// State owned by a search session's sequencing task.
///
/// Holds the accepted query text, the single pending slot, the in-flight
/// flag and the last published result list. A pending query only exists
/// while a request is in flight; completion drains it.
#[derive(Debug, Clone, Default)]
pub struct CoordinatorState {
    accepted_query: String,
    pending_query: Option<String>,
    in_flight: bool,
    results: Option<Vec<Candidate>>,
}

impl CoordinatorState {
    /// Fresh state: empty accepted query, nothing pending, no results yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last query text accepted for searching. Starts empty, which is why a
    /// leading empty submission is suppressed as redundant.
    #[must_use]
    pub fn accepted_query(&self) -> &str {
        &self.accepted_query
    }

    /// Query queued behind the outstanding request, if any.
    #[must_use]
    pub fn pending_query(&self) -> Option<&str> {
        self.pending_query.as_deref()
    }

    /// Last published result list. `None` until the first search is
    /// accepted; an empty list means a search ran (or is running) with
    /// nothing to show.
    #[must_use]
    pub fn results(&self) -> Option<&[Candidate]> {
        self.results.as_deref()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.in_flight, self.pending_query.is_some()) {
            (false, _) => Phase::Idle,
            (true, false) => Phase::InFlight,
            (true, true) => Phase::InFlightWithPending,
        }
    }

    /// Feed one submitted query through the state machine.
    ///
    /// Returns the query to dispatch now, or `None` when the submission was
    /// suppressed as redundant or queued behind the outstanding request.
    ///
    /// Redundancy is checked first: re-submitting the accepted text while a
    /// request is outstanding neither dispatches nor clobbers an already
    /// queued pending query. Accepting a query clears the published results
    /// to an empty list so "searching" is never shown as "no search yet".
    pub fn submit(&mut self, text: &str) -> Option<String> {
        if text == self.accepted_query {
            return None;
        }
        if self.in_flight {
            self.pending_query = Some(text.to_owned());
            return None;
        }

        self.accepted_query = text.to_owned();
        self.results = Some(Vec::new());
        self.in_flight = true;
        Some(self.accepted_query.clone())
    }

    /// Record completion of the outstanding request, publishing its
    /// reconciled list. Success and failure look identical here; a failed
    /// fetch completes with an empty list.
    pub fn complete(&mut self, reconciled: Vec<Candidate>) {
        self.results = Some(reconciled);
        self.in_flight = false;
    }

    /// Take the pending query, if any, and run it through
    /// [`submit`](Self::submit). Called after [`complete`](Self::complete);
    /// returns the drained query to dispatch, or `None` when the session
    /// stays idle.
    pub fn drain_pending(&mut self) -> Option<String> {
        self.pending_query
            .take()
            .and_then(|next| self.submit(&next))
    }
}
