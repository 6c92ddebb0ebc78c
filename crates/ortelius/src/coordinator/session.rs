//! Async shell around the coordinator state machine.
//!
//! A spawned task owns the [`CoordinatorState`] and is the single sequencing
//! context for every transition, so the state needs no locks. Handles feed
//! the task over an unbounded event channel and observe published result
//! lists on a watch channel. Events sent from one handle are processed in
//! submission order.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::state::CoordinatorState;
use crate::{
    candidate::Candidate, client::Geocoder, config::SearchConfig, reconcile::reconcile,
};

/// Events processed by the sequencing task.
#[derive(Debug)]
enum Event {
    Submit(String),
    Completed(Vec<Candidate>),
}

/// Sequencing task behind a [`SearchSession`].
///
/// Owns the state machine, spawns one fetch task per dispatched query and
/// publishes a result snapshot after every observable transition. Fetch
/// failures are absorbed here: they complete the request with an empty list,
/// indistinguishable from a search with no results, and leave a `warn!` in
/// the log as the only trace.
pub struct SearchCoordinator {
    state: CoordinatorState,
    geocoder: Arc<dyn Geocoder>,
    config: SearchConfig,
    // Weak so the inbox closes once every session handle is gone; fetch
    // tasks hold a strong sender only for the lifetime of one request.
    events: mpsc::WeakUnboundedSender<Event>,
    results: watch::Sender<Option<Vec<Candidate>>>,
}

impl SearchCoordinator {
    /// Spawn a session task over `geocoder` with `config`.
    ///
    /// The task runs until every [`SearchSession`] handle has been dropped
    /// and the outstanding fetch, if any, has completed.
    pub fn spawn(geocoder: Arc<dyn Geocoder>, config: SearchConfig) -> SearchSession {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = watch::channel(None);

        let coordinator = Self {
            state: CoordinatorState::new(),
            geocoder,
            config,
            events: events_tx.downgrade(),
            results: results_tx,
        };
        tokio::spawn(coordinator.run(events_rx));

        SearchSession {
            events: events_tx,
            results: results_rx,
        }
    }

    async fn run(mut self, mut events: mpsc::UnboundedReceiver<Event>) {
        info!("search session started");
        while let Some(event) = events.recv().await {
            self.handle(event);
        }
        info!("search session stopped");
    }

    fn handle(&mut self, event: Event) {
        match event {
            Event::Submit(text) => {
                debug!(query = %text, "submit received");
                if let Some(query) = self.state.submit(&text) {
                    self.publish();
                    self.dispatch(query);
                }
            }
            Event::Completed(raw) => {
                let reconciled = reconcile(raw, &self.config.filter_category);
                debug!(count = reconciled.len(), "request completed");
                self.state.complete(reconciled);
                self.publish();
                if let Some(query) = self.state.drain_pending() {
                    self.publish();
                    self.dispatch(query);
                }
            }
        }
    }

    /// Start the fetch for `query` without blocking the event loop; the
    /// spawned task reports back through the inbox so completion handling
    /// runs on the sequencing task like everything else.
    fn dispatch(&self, query: String) {
        let Some(events) = self.events.upgrade() else {
            // Every session handle is gone; nobody is left to observe.
            return;
        };
        let geocoder = Arc::clone(&self.geocoder);

        tokio::spawn(async move {
            let raw = match geocoder.search(&query).await {
                Ok(raw) => raw,
                Err(error) => {
                    warn!(query = %query, %error, "fetch failed, completing with empty results");
                    Vec::new()
                }
            };
            let _ = events.send(Event::Completed(raw));
        });
    }

    fn publish(&self) {
        let snapshot = self.state.results().map(<[Candidate]>::to_vec);
        self.results.send_replace(snapshot);
    }
}

/// Handle to a running search session.
///
/// Cheap to clone; all clones feed the same sequencing task. Dropping the
/// last clone stops the session.
#[derive(Debug, Clone)]
pub struct SearchSession {
    events: mpsc::UnboundedSender<Event>,
    results: watch::Receiver<Option<Vec<Candidate>>>,
}

impl SearchSession {
    /// Submit a query. Never blocks; redundant and superseded queries are
    /// weeded out by the sequencing task.
    pub fn submit(&self, text: impl Into<String>) {
        // A send failure only means the session task is already gone.
        let _ = self.events.send(Event::Submit(text.into()));
    }

    /// Subscribe to published result lists.
    ///
    /// The value starts as `None` ("no search yet"); an empty list means a
    /// search is running or finished with nothing to show.
    #[must_use]
    pub fn results(&self) -> watch::Receiver<Option<Vec<Candidate>>> {
        self.results.clone()
    }

    /// The latest published result list.
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<Candidate>> {
        self.results.borrow().clone()
    }
}
