//! Wire types for the analysis endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body POSTed to the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Confidence as reported by the service.
///
/// The ensemble backend sends a fraction in `0..=1`, the fact checker sends a
/// label such as `"HIGH"`. Display only, never compared against a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(f64),
    Label(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Score(score) => write!(f, "{:.1}%", score * 100.0),
            Confidence::Label(label) => f.write_str(label),
        }
    }
}

/// One analyzed image from the media-scan contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictEntry {
    /// Verdict label, e.g. `"FAKE"` or `"REAL"`.
    pub result: String,
    pub confidence: Confidence,
    #[serde(default)]
    pub base64_image: Option<String>,
    #[serde(default)]
    pub scraped_image_url: Option<String>,
    #[serde(default)]
    pub model_used: Option<String>,
}

/// Success payload of the media-scan contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaScanReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub results: Vec<VerdictEntry>,
}

/// Success payload of the fact-check contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckReport {
    pub verdict: String,
    pub confidence: Confidence,
    pub explanation: String,
    #[serde(default)]
    pub key_sources: Vec<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub post_url: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
}

/// Parsed success payload, tagged by the contract it was decoded with.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisReport {
    MediaScan(MediaScanReport),
    FactCheck(FactCheckReport),
}

impl AnalysisReport {
    /// Number of verdict entries the report carries.
    pub fn entry_count(&self) -> usize {
        match self {
            AnalysisReport::MediaScan(report) => report.results.len(),
            AnalysisReport::FactCheck(_) => 1,
        }
    }
}

/// Error body of a non-success response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `detail` field when it is a non-empty string.
    pub fn detail_message(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}
