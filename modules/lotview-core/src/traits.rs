// Trait abstractions for the pipeline's external collaborators.
//
// DealerSource: the dealership/review HTTP service, raw records in, posts out.
// SentimentAnalyzer: the NLU service, one label per text.
//
// These enable deterministic testing with mock implementations:
// no network, no credentials. `cargo test` in seconds.

use anyhow::Result;
use async_trait::async_trait;

use dealer_client::{DealerClient, PostResponse, RawDealer, RawReview, ReviewPayload};
use lotview_common::SentimentLabel;
use nlu_client::NluClient;

// ---------------------------------------------------------------------------
// DealerSource
// ---------------------------------------------------------------------------

#[async_trait]
pub trait DealerSource: Send + Sync {
    /// All dealerships, raw, in upstream order. Empty on outage.
    async fn dealers(&self) -> Vec<RawDealer>;

    /// Dealerships matching an id filter.
    async fn dealer_by_id(&self, id: i64) -> Vec<RawDealer>;

    /// Dealerships in a state.
    async fn dealers_by_state(&self, state: &str) -> Vec<RawDealer>;

    /// Raw reviews for a dealership, in upstream order. Empty on outage.
    async fn reviews_for_dealer(&self, dealer_id: i64) -> Vec<RawReview>;

    /// Post a new review. Failures propagate; submission needs feedback.
    async fn submit_review(
        &self,
        payload: &ReviewPayload,
    ) -> std::result::Result<PostResponse, dealer_client::DealerApiError>;
}

#[async_trait]
impl DealerSource for DealerClient {
    async fn dealers(&self) -> Vec<RawDealer> {
        self.fetch_dealers().await
    }

    async fn dealer_by_id(&self, id: i64) -> Vec<RawDealer> {
        self.fetch_dealer_by_id(id).await
    }

    async fn dealers_by_state(&self, state: &str) -> Vec<RawDealer> {
        self.fetch_dealers_by_state(state).await
    }

    async fn reviews_for_dealer(&self, dealer_id: i64) -> Vec<RawReview> {
        self.fetch_reviews(dealer_id).await
    }

    async fn submit_review(
        &self,
        payload: &ReviewPayload,
    ) -> std::result::Result<PostResponse, dealer_client::DealerApiError> {
        self.post_review(payload).await
    }
}

// ---------------------------------------------------------------------------
// SentimentAnalyzer
// ---------------------------------------------------------------------------

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Classify one text. Errors are the caller's policy decision.
    async fn classify(&self, text: &str) -> Result<SentimentLabel>;
}

#[async_trait]
impl SentimentAnalyzer for NluClient {
    async fn classify(&self, text: &str) -> Result<SentimentLabel> {
        let doc = self.analyze_sentiment(text).await?;
        Ok(doc.sentiment())
    }
}
