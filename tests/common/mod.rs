//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use buster::analysis::{
    AnalysisError, AnalysisReport, AnalysisService, AnalyzeRequest, Confidence, MediaScanReport,
    VerdictEntry,
};
use buster::config::{AnalysisConfig, ResponseContract};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn analysis_config(endpoint: &str, contract: ResponseContract) -> AnalysisConfig {
    AnalysisConfig {
        endpoint: endpoint.to_string(),
        contract,
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..AnalysisConfig::default()
    }
}

pub fn media_report(labels: &[&str]) -> AnalysisReport {
    AnalysisReport::MediaScan(MediaScanReport {
        status: Some("success".to_string()),
        url: None,
        results: labels
            .iter()
            .map(|label| VerdictEntry {
                result: label.to_string(),
                confidence: Confidence::Score(0.9),
                base64_image: None,
                scraped_image_url: None,
                model_used: None,
            })
            .collect(),
    })
}

/// In-process service double. Replies per URL in enqueue order, optionally
/// after a delay, and records every request it sees.
#[derive(Clone, Default)]
pub struct ScriptedService {
    replies: Arc<Mutex<HashMap<String, VecDeque<Reply>>>>,
    seen: Arc<Mutex<Vec<AnalyzeRequest>>>,
}

type Reply = (Duration, Result<AnalysisReport, AnalysisError>);

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, url: &str, outcome: Result<AnalysisReport, AnalysisError>) -> &Self {
        self.reply_after(url, Duration::ZERO, outcome)
    }

    pub fn reply_after(
        &self,
        url: &str,
        delay: Duration,
        outcome: Result<AnalysisReport, AnalysisError>,
    ) -> &Self {
        self.replies
            .lock()
            .entry(url.to_string())
            .or_default()
            .push_back((delay, outcome));
        self
    }

    pub fn requests(&self) -> Vec<AnalyzeRequest> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl AnalysisService for ScriptedService {
    fn contract(&self) -> ResponseContract {
        ResponseContract::MediaScan
    }

    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisReport, AnalysisError> {
        let next = self
            .replies
            .lock()
            .get_mut(&request.url)
            .and_then(VecDeque::pop_front);
        self.seen.lock().push(request);
        let (delay, outcome) = next.unwrap_or((
            Duration::ZERO,
            Err(AnalysisError::Transport("no scripted reply".to_string())),
        ));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        outcome
    }
}
