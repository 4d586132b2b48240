//! Error types for calls to the analysis endpoint.

use thiserror::Error;

/// Errors that can occur while analyzing a URL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// No usable response: connection refused, DNS failure, body read error.
    #[error("{0}")]
    Transport(String),

    /// The request exceeded the configured total timeout.
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// A success response whose body does not match the selected contract.
    #[error("{0}")]
    Decode(String),
}

impl AnalysisError {
    /// Message shown in the error panel.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Short machine-friendly kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Service { .. } => "service_error",
            AnalysisError::Transport(_) => "transport_error",
            AnalysisError::Timeout { .. } => "timeout",
            AnalysisError::Decode(_) => "decode_error",
        }
    }

    /// HTTP status for service errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Transport(describe_reqwest_error(&err))
    }
}

/// reqwest's top-level message hides the root cause ("error sending request
/// for url"), so the source chain is appended.
fn describe_reqwest_error(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_shows_server_message_verbatim() {
        let err = AnalysisError::Service {
            status: 500,
            message: "blocked".to_string(),
        };
        assert_eq!(err.user_message(), "blocked");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.kind(), "service_error");
    }

    #[test]
    fn transport_error_is_untranslated() {
        let err = AnalysisError::Transport("dns error: failed to lookup address".to_string());
        assert_eq!(err.user_message(), "dns error: failed to lookup address");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn timeout_names_duration() {
        let err = AnalysisError::Timeout { seconds: 60 };
        assert_eq!(err.user_message(), "Request timed out after 60s");
    }
}
