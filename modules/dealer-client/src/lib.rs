pub mod error;
pub mod types;

pub use error::{DealerApiError, Result};
pub use types::{PostResponse, RawDealer, RawReview, ReviewDoc, ReviewPayload};

use std::time::Duration;

use serde_json::Value;

use types::parse_items;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the Cloudant-backed dealership and review services.
///
/// GET calls degrade: transport failures and non-success statuses are logged
/// and produce an empty result, so a flaky upstream never breaks page
/// rendering. POST calls propagate failures, since submitting a review is a
/// user-facing action that needs explicit feedback.
pub struct DealerClient {
    http: reqwest::Client,
    dealer_base: String,
    review_base: String,
    api_key: Option<String>,
}

impl DealerClient {
    pub fn new(dealer_base: impl Into<String>, review_base: impl Into<String>) -> Self {
        Self {
            http: build_http(DEFAULT_TIMEOUT),
            dealer_base: dealer_base.into(),
            review_base: review_base.into(),
            api_key: None,
        }
    }

    /// Send requests with basic auth (`apikey` username), as the IAM-fronted
    /// deployments require.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = build_http(timeout);
        self
    }

    /// Fetch all dealerships.
    pub async fn fetch_dealers(&self) -> Vec<RawDealer> {
        let items = self.get_array(&self.dealer_base, &[]).await;
        parse_items(items, "dealer")
    }

    /// Fetch the dealership(s) matching an id filter.
    pub async fn fetch_dealer_by_id(&self, id: i64) -> Vec<RawDealer> {
        let items = self
            .get_array(&self.dealer_base, &[("id", id.to_string())])
            .await;
        parse_items(items, "dealer")
    }

    /// Fetch dealerships in a state.
    pub async fn fetch_dealers_by_state(&self, state: &str) -> Vec<RawDealer> {
        let items = self
            .get_array(&self.dealer_base, &[("state", state.to_string())])
            .await;
        parse_items(items, "dealer")
    }

    /// Fetch all reviews for a dealership, in upstream order.
    pub async fn fetch_reviews(&self, dealer_id: i64) -> Vec<RawReview> {
        let items = self
            .get_array(&self.review_base, &[("id", dealer_id.to_string())])
            .await;
        parse_items(items, "review")
    }

    /// Post a new review. Unlike the GET paths this surfaces every failure:
    /// transport errors as `Network`, non-2xx statuses as `Api`.
    pub async fn post_review(&self, payload: &ReviewPayload) -> Result<PostResponse> {
        let mut req = self.http.post(&self.review_base).json(payload);
        if let Some(key) = &self.api_key {
            req = req.basic_auth("apikey", Some(key));
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(DealerApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        tracing::info!(status = status.as_u16(), "Review posted");
        Ok(PostResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// GET a JSON array. Never errors: failures are logged and map to an
    /// empty list, which downstream treats as "no data".
    async fn get_array(&self, url: &str, query: &[(&str, String)]) -> Vec<Value> {
        let mut req = self.http.get(url).query(query);
        if let Some(key) = &self.api_key {
            req = req.basic_auth("apikey", Some(key));
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(url, error = %e, "GET request failed");
                return Vec::new();
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "GET returned non-success status");
            return Vec::new();
        }

        match resp.json::<Vec<Value>>().await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(url, error = %e, "Failed to decode JSON array");
                Vec::new()
            }
        }
    }
}

fn build_http(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build HTTP client")
}
