//! Intents for the submission flow.

use crate::analysis::{AnalysisError, AnalysisReport};
use crate::ui::mvi::Intent;

use super::state::RequestId;

#[derive(Debug, Clone)]
pub enum SubmissionIntent {
    /// A non-empty URL was submitted and a request was issued for it.
    Submit { request_id: RequestId, url: String },

    /// The request identified by `request_id` finished.
    Settle {
        request_id: RequestId,
        outcome: Result<AnalysisReport, AnalysisError>,
    },
}

impl Intent for SubmissionIntent {}
