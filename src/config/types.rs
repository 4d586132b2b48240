use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which response shape the analysis endpoint speaks.
///
/// The two backends disagree on the payload; exactly one is selected and the
/// other is never tried as a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseContract {
    /// `{ results: [{ result, confidence, ... }] }` from the image ensemble.
    MediaScan,
    /// `{ verdict, confidence, explanation, key_sources }` from the fact checker.
    FactCheck,
}

impl ResponseContract {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseContract::MediaScan => "media-scan",
            ResponseContract::FactCheck => "fact-check",
        }
    }
}

/// Remote analysis endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Full URL the submission is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_contract")]
    pub contract: ResponseContract,
    /// Pipeline version tag sent with fact-check requests.
    #[serde(default = "default_version")]
    pub version: String,
    /// Total request timeout in seconds (default: 60).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Shown when the service fails without a `detail` message.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

/// Hero banner typing animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
    #[serde(default = "default_typing_ms")]
    pub typing_ms: u64,
    #[serde(default = "default_deleting_ms")]
    pub deleting_ms: u64,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file used while the terminal UI is running.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    "http://localhost:8000/analyze".to_string()
}

fn default_contract() -> ResponseContract {
    ResponseContract::MediaScan
}

fn default_version() -> String {
    "v1".to_string()
}

fn default_timeout() -> u32 {
    60
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_fallback_message() -> String {
    "Failed to analyze link. It might be private or blocked.".to_string()
}

fn default_phrases() -> Vec<String> {
    [
        "Is this image real or AI?",
        "Detect deepfakes instantly.",
        "Verify any link, bust the fakes.",
        "Don't get fooled by AI.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_typing_ms() -> u64 {
    50
}

fn default_deleting_ms() -> u64 {
    25
}

fn default_pause_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            contract: default_contract(),
            version: default_version(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            fallback_message: default_fallback_message(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            typing_ms: default_typing_ms(),
            deleting_ms: default_deleting_ms(),
            pause_ms: default_pause_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
