use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tokio::time::timeout;

use crate::analysis::error::AnalysisError;
use crate::analysis::types::{
    AnalysisReport, AnalyzeRequest, ErrorBody, FactCheckReport, MediaScanReport,
};
use crate::config::{AnalysisConfig, ResponseContract};

/// The remote service that turns a URL into a verdict.
///
/// The submission controller only talks to this trait, so tests can swap in
/// an in-process double instead of a live endpoint.
#[async_trait]
pub trait AnalysisService: Send + Sync + 'static {
    /// Contract this service speaks; decides the request body shape.
    fn contract(&self) -> ResponseContract;

    /// Version tag sent with fact-check requests.
    fn version(&self) -> Option<&str> {
        None
    }

    /// Analyze one URL. Exactly one request per call, never retried.
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisReport, AnalysisError>;

    /// Build the request for `url` according to the contract.
    fn request_for(&self, url: &str) -> AnalyzeRequest {
        let request = AnalyzeRequest::new(url);
        match (self.contract(), self.version()) {
            (ResponseContract::FactCheck, Some(version)) => request.with_version(version),
            _ => request,
        }
    }
}

/// reqwest-backed client for the analysis endpoint.
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: String,
    contract: ResponseContract,
    version: String,
    request_timeout: Duration,
    fallback_message: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            contract: config.contract,
            version: config.version.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
            fallback_message: config.fallback_message.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn do_analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, AnalysisError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::detail_message)
                .unwrap_or_else(|| self.fallback_message.clone());
            return Err(AnalysisError::Service {
                status: status.as_u16(),
                message,
            });
        }

        decode_report(self.contract, &body)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    fn contract(&self) -> ResponseContract {
        self.contract
    }

    fn version(&self) -> Option<&str> {
        Some(&self.version)
    }

    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisReport, AnalysisError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            contract = self.contract.as_str(),
            url = %request.url,
            "Sending analysis request"
        );

        match timeout(self.request_timeout, self.do_analyze(&request)).await {
            Ok(result) => result,
            Err(_) => Err(AnalysisError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }
}

/// Decode a success body with the selected contract only.
pub fn decode_report(
    contract: ResponseContract,
    body: &[u8],
) -> Result<AnalysisReport, AnalysisError> {
    match contract {
        ResponseContract::MediaScan => {
            let report: MediaScanReport = serde_json::from_slice(body)
                .map_err(|e| AnalysisError::Decode(e.to_string()))?;
            if report.results.is_empty() {
                return Err(AnalysisError::Decode(
                    "analysis service returned no results".to_string(),
                ));
            }
            Ok(AnalysisReport::MediaScan(report))
        }
        ResponseContract::FactCheck => {
            let report: FactCheckReport = serde_json::from_slice(body)
                .map_err(|e| AnalysisError::Decode(e.to_string()))?;
            Ok(AnalysisReport::FactCheck(report))
        }
    }
}
