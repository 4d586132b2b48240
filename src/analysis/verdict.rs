//! Client-side verdict classification.
//!
//! The service decides; the client only maps its label onto a badge.
//! Confidence never takes part in the decision.

use super::types::{AnalysisReport, VerdictEntry};

/// Case-sensitive markers of a synthetic or manipulated verdict.
pub const FAKE_MARKERS: &[&str] = &["FAKE", "ARTIFICIAL", "AI"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authenticity {
    Fake,
    Real,
}

impl Authenticity {
    /// Classify a verdict label by substring membership.
    pub fn classify(label: &str) -> Self {
        if FAKE_MARKERS.iter().any(|marker| label.contains(marker)) {
            Authenticity::Fake
        } else {
            Authenticity::Real
        }
    }

    pub fn is_fake(&self) -> bool {
        matches!(self, Authenticity::Fake)
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Authenticity::Fake => "FAKE",
            Authenticity::Real => "REAL",
        }
    }
}

impl VerdictEntry {
    pub fn authenticity(&self) -> Authenticity {
        Authenticity::classify(&self.result)
    }
}

impl AnalysisReport {
    /// Classification of every entry, in response order.
    pub fn classifications(&self) -> Vec<Authenticity> {
        match self {
            AnalysisReport::MediaScan(report) => {
                report.results.iter().map(VerdictEntry::authenticity).collect()
            }
            AnalysisReport::FactCheck(report) => vec![Authenticity::classify(&report.verdict)],
        }
    }

    /// True when any entry is classified fake.
    pub fn any_fake(&self) -> bool {
        self.classifications().iter().any(Authenticity::is_fake)
    }
}
