//! Reducer for the submission flow.

use crate::ui::mvi::Reducer;

use super::intent::SubmissionIntent;
use super::state::SubmissionState;

/// Pure transitions. Scrolling and request spawning are the controller's job.
pub struct SubmissionReducer;

impl Reducer for SubmissionReducer {
    type State = SubmissionState;
    type Intent = SubmissionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Whatever was shown before is discarded.
            SubmissionIntent::Submit { request_id, url } => {
                SubmissionState::Pending { request_id, url }
            }

            SubmissionIntent::Settle {
                request_id,
                outcome,
            } => match state {
                SubmissionState::Pending {
                    request_id: pending,
                    url,
                } if pending == request_id => match outcome {
                    Ok(report) => SubmissionState::Success {
                        request_id,
                        url,
                        report,
                    },
                    Err(err) => SubmissionState::Failure {
                        request_id,
                        url,
                        message: err.user_message(),
                    },
                },
                // Superseded or already settled: keep what is shown.
                other => other,
            },
        }
    }
}
