pub mod error;
pub mod types;

pub use error::{NluError, Result};
pub use types::DocumentSentiment;

use std::time::Duration;

use tracing::debug;

use types::{AnalyzeRequest, AnalyzeResponse, Features, SentimentOptions};

/// API version pinned for the analyze endpoint.
const DEFAULT_VERSION: &str = "2022-04-07";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for a Watson-style NLU instance: `POST {url}/v1/analyze` with
/// basic auth (`apikey` username) and a `version` query parameter.
pub struct NluClient {
    http: reqwest::Client,
    service_url: String,
    api_key: String,
    version: String,
}

impl NluClient {
    pub fn new(service_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: build_http(DEFAULT_TIMEOUT),
            service_url: service_url.into(),
            api_key: api_key.into(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = build_http(timeout);
        self
    }

    /// Analyze the document-level sentiment of a text. Errors here are the
    /// caller's policy decision: the review pipeline degrades them to a
    /// neutral label rather than failing the batch.
    pub async fn analyze_sentiment(&self, text: &str) -> Result<DocumentSentiment> {
        let url = format!("{}/v1/analyze", self.service_url.trim_end_matches('/'));
        let request = AnalyzeRequest {
            text,
            features: Features {
                sentiment: SentimentOptions {},
            },
        };

        debug!(chars = text.len(), "NLU sentiment request");

        let resp = self
            .http
            .post(&url)
            .query(&[("version", self.version.as_str())])
            .basic_auth("apikey", Some(&self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(NluError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnalyzeResponse = resp.json().await?;
        parsed
            .sentiment
            .and_then(|s| s.document)
            .ok_or_else(|| NluError::Parse("response missing document sentiment".to_string()))
    }
}

fn build_http(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build HTTP client")
}
