//! Client side of the remote analysis service.
//!
//! The service is opaque: this module only knows how to send a URL, decode
//! the verdict for the configured contract, and classify verdict labels.

mod client;
mod error;
mod preview;
mod types;
mod verdict;

pub use client::{decode_report, AnalysisService, HttpAnalysisClient};
pub use error::AnalysisError;
pub use preview::Preview;
pub use types::{
    AnalysisReport, AnalyzeRequest, Confidence, FactCheckReport, MediaScanReport, VerdictEntry,
};
pub use verdict::{Authenticity, FAKE_MARKERS};
