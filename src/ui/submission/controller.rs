//! Owner of the submission state.
//!
//! Issues a request per submit on the tokio runtime and receives its outcome
//! back as a [`Settlement`] through a channel drained by the UI thread. Only
//! the UI thread mutates the state.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::analysis::{AnalysisError, AnalysisReport, AnalysisService};
use crate::ui::mvi::{EffectQueue, Reducer, UiEffect};

use super::intent::SubmissionIntent;
use super::reducer::SubmissionReducer;
use super::state::{RequestId, SubmissionState};

/// Outcome of one request, tagged with the id it was issued under.
#[derive(Debug)]
pub struct Settlement {
    pub request_id: RequestId,
    pub outcome: Result<AnalysisReport, AnalysisError>,
}

pub type SettlementSender = mpsc::UnboundedSender<Settlement>;

pub struct SubmissionController {
    state: SubmissionState,
    service: Arc<dyn AnalysisService>,
    settlements: SettlementSender,
    runtime: Handle,
    last_request_id: RequestId,
    in_flight: Option<JoinHandle<()>>,
    effects: EffectQueue,
}

impl SubmissionController {
    pub fn new(
        service: Arc<dyn AnalysisService>,
        settlements: SettlementSender,
        runtime: Handle,
    ) -> Self {
        Self {
            state: SubmissionState::default(),
            service,
            settlements,
            runtime,
            last_request_id: 0,
            in_flight: None,
            effects: EffectQueue::new(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Id of the most recently issued request, 0 before the first submit.
    pub fn last_request_id(&self) -> RequestId {
        self.last_request_id
    }

    /// Submit `url` for analysis.
    ///
    /// Blank input is ignored: no request, no state change, `None`. Otherwise
    /// the state is `Pending` by the time this returns, a scroll effect is
    /// queued, and exactly one request is running. A request still in flight
    /// from an earlier submit is aborted.
    pub fn submit(&mut self, url: &str) -> Option<RequestId> {
        let url = url.trim();
        if url.is_empty() {
            tracing::trace!("Ignoring empty submission");
            return None;
        }

        self.last_request_id += 1;
        let request_id = self.last_request_id;

        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                previous.abort();
                tracing::debug!(request_id, "Aborted superseded analysis request");
            }
        }

        self.dispatch(SubmissionIntent::Submit {
            request_id,
            url: url.to_string(),
        });
        self.effects.push(UiEffect::ScrollToResult);

        let service = Arc::clone(&self.service);
        let settlements = self.settlements.clone();
        let request = service.request_for(url);
        self.in_flight = Some(self.runtime.spawn(async move {
            let outcome = service.analyze(request).await;
            if settlements
                .send(Settlement {
                    request_id,
                    outcome,
                })
                .is_err()
            {
                tracing::trace!(request_id, "Settlement dropped (receiver gone)");
            }
        }));

        tracing::info!(request_id, url, "Submitted URL for analysis");
        Some(request_id)
    }

    /// Apply a settlement. Returns true when the visible state changed.
    ///
    /// Settlements of anything but the latest request are discarded.
    pub fn apply(&mut self, settlement: Settlement) -> bool {
        let Settlement {
            request_id,
            outcome,
        } = settlement;

        if request_id != self.last_request_id {
            tracing::debug!(
                request_id,
                latest = self.last_request_id,
                "Discarding stale analysis result"
            );
            return false;
        }

        match &outcome {
            Ok(report) => tracing::info!(
                request_id,
                entries = report.entry_count(),
                fake = report.any_fake(),
                "Analysis succeeded"
            ),
            Err(err) => tracing::warn!(
                request_id,
                kind = err.kind(),
                status = err.status(),
                "Analysis failed: {}",
                err
            ),
        }

        let succeeded = outcome.is_ok();
        let changed = self.dispatch(SubmissionIntent::Settle {
            request_id,
            outcome,
        });
        if changed {
            self.in_flight = None;
            // The result panel grew; keep it in view.
            if succeeded {
                self.effects.push(UiEffect::ScrollToResult);
            }
        }
        changed
    }

    /// Effects queued since the last call, in order.
    pub fn take_effects(&mut self) -> Vec<UiEffect> {
        self.effects.drain()
    }

    fn dispatch(&mut self, intent: SubmissionIntent) -> bool {
        let before = self.state.clone();
        self.state = SubmissionReducer::reduce(std::mem::take(&mut self.state), intent);
        self.state != before
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
