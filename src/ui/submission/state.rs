//! State for the submission flow.

use crate::analysis::AnalysisReport;
use crate::ui::mvi::UiState;

/// Sequence number of a submission, increasing per controller.
pub type RequestId = u64;

/// Outcome of the latest submission. Only one panel is ever shown, keyed off
/// this enum.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// Request in flight.
    Pending { request_id: RequestId, url: String },

    Success {
        request_id: RequestId,
        url: String,
        report: AnalysisReport,
    },

    Failure {
        request_id: RequestId,
        url: String,
        message: String,
    },
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionState::Success { .. } | SubmissionState::Failure { .. }
        )
    }

    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Pending { request_id, .. }
            | SubmissionState::Success { request_id, .. }
            | SubmissionState::Failure { request_id, .. } => Some(*request_id),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Pending { url, .. }
            | SubmissionState::Success { url, .. }
            | SubmissionState::Failure { url, .. } => Some(url),
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            SubmissionState::Success { report, .. } => Some(report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failure { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl UiState for SubmissionState {}
