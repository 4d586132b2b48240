//! Headless one-shot analysis for `--check`.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::analysis::AnalysisService;
use crate::ui::result_panel::result_lines;
use crate::ui::submission::{SubmissionController, SubmissionState};

/// Submit `url` through a fresh controller and wait for it to settle.
///
/// Returns `Idle` when the input is blank and nothing was sent.
pub async fn check_url(service: Arc<dyn AnalysisService>, url: &str) -> SubmissionState {
    let (settle_tx, mut settle_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut controller = SubmissionController::new(service, settle_tx, Handle::current());

    if controller.submit(url).is_none() {
        return SubmissionState::Idle;
    }

    while let Some(settlement) = settle_rx.recv().await {
        if controller.apply(settlement) {
            break;
        }
    }
    controller.state().clone()
}

/// The result region as plain text, one line per row.
pub fn render_plain(state: &SubmissionState) -> String {
    result_lines(state, 0)
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Process exit code for a settled check.
pub fn exit_code(state: &SubmissionState) -> u8 {
    match state {
        SubmissionState::Success { .. } => 0,
        _ => 1,
    }
}
