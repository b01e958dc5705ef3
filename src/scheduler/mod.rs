//! Request scheduling: debounce, generation tokens, staleness suppression.
//!
//! Every observed change of `(text, source, target)` starts a new cycle with a
//! fresh generation token. A cycle waits out the debounce window, issues one
//! backend call, and applies the answer only if no newer cycle has started in
//! the meantime. Superseded calls keep running; their answers are dropped.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tokio::time::{Instant, sleep_until};

use crate::error::{BackendError, SessionError};
use crate::sources::TranslateClient;
use crate::state::{Phase, SessionEvent, SessionState, TranslationRequest, TranslationResult};


/// Debounce window used when the configuration does not override it.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Answer of one backend call, tagged with the request that produced it.
type CallOutcome = (TranslationRequest, Result<TranslationResult, BackendError>);

/// Cycle waiting for its debounce deadline.
#[derive(Debug)]
struct PendingCycle {
    /// Request to issue once the deadline passes.
    request: TranslationRequest,
    /// When the debounce window closes.
    deadline: Instant,
}

/// What woke the scheduler up.
enum Wake {
    /// The pending cycle's debounce window closed.
    DebounceElapsed,
    /// A backend call task finished.
    Completed(Result<CallOutcome, JoinError>),
}

/// What: Owns debouncing and staleness suppression for one session.
///
/// Details:
/// - The only writer of `SessionState`'s loading flag, result and detection.
/// - Generation tokens start at 1 and increase by one per cycle; a cleared
///   text also consumes a token so answers issued before the clear are stale.
/// - Comparing the token and applying the answer happen inside one `&mut`
///   call, so no other edit or completion can interleave.
pub struct RequestScheduler {
    /// Backend used for every call.
    client: Arc<dyn TranslateClient>,
    /// Debounce window.
    debounce: Duration,
    /// Token handed to the next cycle.
    next_generation: u64,
    /// Token of the most recent cycle; only its answer is applied.
    latest_generation: u64,
    /// Lifecycle of the most recent cycle.
    phase: Phase,
    /// Cycle waiting on its debounce deadline.
    pending: Option<PendingCycle>,
    /// Backend calls still running, current or superseded.
    calls: JoinSet<CallOutcome>,
    /// Notifications for the presentation layer.
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl RequestScheduler {
    /// What: Create an idle scheduler.
    ///
    /// Inputs:
    /// - `client`: Backend shared by all calls of the session
    /// - `debounce`: Quiet period required before a call is issued
    /// - `events`: Channel receiving loading/translated/cleared/notice events
    #[must_use]
    pub fn new(
        client: Arc<dyn TranslateClient>,
        debounce: Duration,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            client,
            debounce,
            next_generation: 1,
            latest_generation: 0,
            phase: Phase::Idle,
            pending: None,
            calls: JoinSet::new(),
            events,
        }
    }

    /// Lifecycle phase of the most recent cycle.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Token of the most recent cycle (0 before the first one).
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.latest_generation
    }

    /// Configured debounce window.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Number of backend calls still running, including superseded ones.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.calls.len()
    }

    /// No debounce timer armed and no backend call outstanding.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending.is_none() && self.calls.is_empty()
    }

    /// Hand out the next generation token and make it the current one.
    const fn issue_generation(&mut self) -> u64 {
        let id = self.next_generation;
        self.next_generation += 1;
        self.latest_generation = id;
        id
    }

    /// What: React to a change of `(text, source, target)`.
    ///
    /// Inputs:
    /// - `state`: Session state already holding the new text and languages
    ///
    /// Output:
    /// - None; arms or disarms the debounce timer and updates result fields.
    ///
    /// Details:
    /// - Empty text: disarms the timer, clears result and loading, goes `Idle`.
    ///   No backend call is made.
    /// - Otherwise: replaces any armed timer with a fresh one and goes `Pending`.
    /// - Both paths start a new generation, which makes every outstanding
    ///   call stale.
    pub fn reconsider(&mut self, state: &mut SessionState) {
        let generation = self.issue_generation();
        if state.text().is_empty() {
            self.pending = None;
            state.clear_result();
            self.phase = Phase::Idle;
            tracing::debug!(generation, "[Scheduler] Text empty; cycle cleared");
            let _ = self.events.send(SessionEvent::Cleared);
            return;
        }
        let request = TranslationRequest {
            generation,
            text: state.text().to_string(),
            source: state.source(),
            target: state.target(),
        };
        tracing::trace!(
            generation,
            source = %request.source,
            target = %request.target,
            "[Scheduler] Cycle pending"
        );
        self.pending = Some(PendingCycle {
            request,
            deadline: Instant::now() + self.debounce,
        });
        self.phase = Phase::Pending;
    }

    /// What: Wait for the next timer expiry or call completion and apply it.
    ///
    /// Inputs:
    /// - `state`: Session state to reconcile into
    ///
    /// Output:
    /// - Returns after handling exactly one wake-up. Never returns while the
    ///   scheduler is settled.
    ///
    /// Details:
    /// - Cancel-safe: dropping the future before it completes loses nothing,
    ///   so it can sit in a `select!` next to input handling.
    pub async fn tick(&mut self, state: &mut SessionState) {
        let deadline = self.pending.as_ref().map(|p| p.deadline);
        let wake = tokio::select! {
            () = wait_until(deadline) => Wake::DebounceElapsed,
            Some(joined) = self.calls.join_next() => Wake::Completed(joined),
        };
        match wake {
            Wake::DebounceElapsed => self.fire(state),
            Wake::Completed(Ok(outcome)) => self.complete(state, outcome),
            Wake::Completed(Err(err)) => {
                tracing::error!(error = %err, "[Scheduler] Translation task lost");
            }
        }
    }

    /// Debounce window closed: issue the backend call for the pending cycle.
    fn fire(&mut self, state: &mut SessionState) {
        let Some(PendingCycle { request, .. }) = self.pending.take() else {
            return;
        };
        let generation = request.generation;
        state.set_loading(true);
        self.phase = Phase::InFlight;
        tracing::debug!(
            generation,
            in_flight = self.calls.len() + 1,
            "[Scheduler] Debounce elapsed; calling backend"
        );
        let client = Arc::clone(&self.client);
        self.calls.spawn(async move {
            let call = async {
                client
                    .translate(request.text.clone(), request.source, request.target)
                    .await
            };
            let outcome = AssertUnwindSafe(call)
                .catch_unwind()
                .await
                .unwrap_or(Err(BackendError::Aborted));
            (request, outcome)
        });
        let _ = self.events.send(SessionEvent::Loading { generation });
    }

    /// What: Apply a finished call if it still belongs to the current cycle.
    ///
    /// Inputs:
    /// - `state`: Session state to update
    /// - `outcome`: Originating request plus backend answer
    ///
    /// Details:
    /// - Stale answers are dropped without touching any state.
    /// - Success: result stored, loading cleared, `Resolved`; an auto-detect
    ///   request also records the detected language (the selected source
    ///   keeps the sentinel).
    /// - Failure: loading cleared, last good result kept, `Failed`, and a
    ///   `Notice` is emitted.
    fn complete(&mut self, state: &mut SessionState, outcome: CallOutcome) {
        let (request, answer) = outcome;
        if request.generation != self.latest_generation {
            tracing::debug!(
                generation = request.generation,
                latest = self.latest_generation,
                "[Scheduler] Dropping stale translation"
            );
            return;
        }
        match answer {
            Ok(mut result) => {
                if !request.source.is_auto() {
                    result.resolved_source = request.source;
                }
                tracing::debug!(
                    generation = request.generation,
                    resolved = %result.resolved_source,
                    "[Scheduler] Translation applied"
                );
                state.accept_result(request.generation, request.source, result);
                self.phase = Phase::Resolved;
                let _ = self.events.send(SessionEvent::Translated {
                    generation: request.generation,
                });
            }
            Err(err) => {
                tracing::warn!(
                    generation = request.generation,
                    error = %err,
                    "[Scheduler] Translation failed; keeping last result"
                );
                state.set_loading(false);
                self.phase = Phase::Failed;
                let _ = self
                    .events
                    .send(SessionEvent::Notice(SessionError::Backend(err)));
            }
        }
    }
}

/// Sleep until `deadline`, or forever when no timer is armed.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
