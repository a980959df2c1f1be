use tracing::{debug, warn};

use dealer_client::types::{parse_review_date, RawDealer, ReviewDoc, ReviewPayload};
use lotview_common::{Dealer, NewReview, Review, SentimentLabel};

use crate::error::SubmitError;
use crate::traits::{DealerSource, SentimentAnalyzer};

/// The review ingestion pipeline: fetch → normalize → classify → collect.
///
/// Stateless between calls: every operation fetches fresh from the source.
/// Sentiment is best-effort: a classifier outage degrades single entries to
/// the Neutral label and never blocks the batch.
pub struct ReviewPipeline<S, A> {
    source: S,
    analyzer: A,
}

impl<S: DealerSource, A: SentimentAnalyzer> ReviewPipeline<S, A> {
    pub fn new(source: S, analyzer: A) -> Self {
        Self { source, analyzer }
    }

    /// All dealerships, normalized, in upstream order.
    pub async fn dealers(&self) -> Vec<Dealer> {
        normalize_dealers(self.source.dealers().await)
    }

    /// A single dealership by id: first match for the id filter.
    pub async fn dealer(&self, id: i64) -> Option<Dealer> {
        normalize_dealers(self.source.dealer_by_id(id).await)
            .into_iter()
            .next()
    }

    /// Dealerships in a state, normalized, in upstream order.
    pub async fn dealers_by_state(&self, state: &str) -> Vec<Dealer> {
        normalize_dealers(self.source.dealers_by_state(state).await)
    }

    /// Sentiment-enriched reviews for a dealership, in upstream order.
    /// Records missing required fields are dropped; an unreachable upstream
    /// yields an empty list, never an error.
    pub async fn reviews(&self, dealer_id: i64) -> Vec<Review> {
        let raw = self.source.reviews_for_dealer(dealer_id).await;

        let mut reviews = Vec::with_capacity(raw.len());
        let mut dropped = 0usize;
        for item in raw {
            let Some(mut review) = item.into_review() else {
                dropped += 1;
                continue;
            };
            if review.dealership != dealer_id {
                warn!(
                    dealer_id,
                    found = review.dealership,
                    "Dropping review attributed to a different dealership"
                );
                continue;
            }
            review.sentiment = self.classify_or_neutral(&review.review).await;
            reviews.push(review);
        }

        if dropped > 0 {
            warn!(
                dealer_id,
                dropped, "Dropped review records with missing required fields"
            );
        }
        debug!(dealer_id, count = reviews.len(), "Assembled reviews");
        reviews
    }

    /// Validate and post a new review. Validation failures and API failures
    /// stay distinct so the caller can re-prompt vs. offer a retry.
    pub async fn submit(&self, review: &NewReview) -> Result<(), SubmitError> {
        let payload = build_payload(review)?;
        let resp = self.source.submit_review(&payload).await?;
        debug!(
            status = resp.status,
            dealership = review.dealership,
            "Review submission accepted"
        );
        Ok(())
    }

    async fn classify_or_neutral(&self, text: &str) -> SentimentLabel {
        if text.trim().is_empty() {
            return SentimentLabel::Neutral;
        }
        match self.analyzer.classify(text).await {
            Ok(label) => label,
            Err(e) => {
                warn!(error = %e, "Sentiment classification failed, falling back to neutral");
                SentimentLabel::Neutral
            }
        }
    }
}

fn normalize_dealers(raw: Vec<RawDealer>) -> Vec<Dealer> {
    let total = raw.len();
    let dealers: Vec<Dealer> = raw.into_iter().filter_map(RawDealer::into_dealer).collect();
    if dealers.len() < total {
        warn!(
            dropped = total - dealers.len(),
            "Dropped dealer records with missing required fields"
        );
    }
    dealers
}

/// Validate user input and build the wire payload. The review service checks
/// key presence, so every field is serialized even when absent.
fn build_payload(review: &NewReview) -> Result<ReviewPayload, SubmitError> {
    if review.name.trim().is_empty() {
        return Err(SubmitError::Validation("reviewer name is required".into()));
    }
    if review.review.trim().is_empty() {
        return Err(SubmitError::Validation("review text is required".into()));
    }
    if review.dealership <= 0 {
        return Err(SubmitError::Validation(format!(
            "invalid dealer id: {}",
            review.dealership
        )));
    }

    let purchase_date = match &review.purchase_date {
        Some(raw) => {
            let date = parse_review_date(raw).ok_or_else(|| {
                SubmitError::Validation(format!("unrecognized purchase date: {raw}"))
            })?;
            Some(date)
        }
        None if review.purchase => {
            return Err(SubmitError::Validation(
                "purchase date is required for a purchase review".into(),
            ));
        }
        None => None,
    };

    Ok(ReviewPayload {
        review: ReviewDoc {
            name: review.name.trim().to_string(),
            dealership: review.dealership,
            review: review.review.trim().to_string(),
            purchase: review.purchase,
            purchase_date: purchase_date.map(|d| d.format("%m/%d/%Y").to_string()),
            car_make: review.car_make.clone(),
            car_model: review.car_model.clone(),
            car_year: review.car_year,
        },
    })
}
