use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use lotview_common::{Dealer, Review, SentimentLabel};

// --- Raw wire types ---

/// A dealer document as it arrives from the dealer API. Every field is
/// optional at this level; `into_dealer` decides what is actually required.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDealer {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub short_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub st: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

impl RawDealer {
    /// Convert to a typed Dealer. Every dealer field is required; a record
    /// missing any of them is dropped rather than defaulted.
    pub fn into_dealer(self) -> Option<Dealer> {
        Some(Dealer {
            id: self.id?,
            full_name: self.full_name?,
            short_name: self.short_name?,
            address: self.address?,
            city: self.city?,
            st: self.st?,
            zip: self.zip?,
            lat: self.lat?,
            long: self.long?,
        })
    }
}

/// A review document as it arrives from the review API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    pub name: Option<String>,
    pub dealership: Option<i64>,
    pub review: Option<String>,
    pub purchase: Option<bool>,
    pub purchase_date: Option<String>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i64>,
}

impl RawReview {
    /// Convert to a typed Review. `name`, `dealership`, `review` and
    /// `purchase` are required (absence drops the record); the car fields
    /// and `purchase_date` stay None when missing. Sentiment starts at the
    /// Neutral default and is attached later by the pipeline.
    pub fn into_review(self) -> Option<Review> {
        Some(Review {
            name: self.name?,
            dealership: self.dealership?,
            review: self.review?,
            purchase: self.purchase?,
            purchase_date: self.purchase_date.as_deref().and_then(parse_review_date),
            car_make: self.car_make,
            car_model: self.car_model,
            car_year: self.car_year.and_then(|y| i32::try_from(y).ok()),
            sentiment: SentimentLabel::Neutral,
        })
    }
}

/// Parse a purchase date as stored upstream (`MM/DD/YYYY`) or ISO
/// (`YYYY-MM-DD`). Anything else is treated as absent.
pub fn parse_review_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

/// Deserialize each array item independently, skipping items that do not
/// match the expected shape. One malformed document must not poison the
/// whole response.
pub fn parse_items<T: DeserializeOwned>(items: Vec<serde_json::Value>, what: &str) -> Vec<T> {
    let mut parsed = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<T>(item) {
            Ok(value) => parsed.push(value),
            Err(e) => {
                tracing::warn!(what, error = %e, "Skipping malformed record");
            }
        }
    }
    parsed
}

// --- Review submission ---

/// Wire shape for posting a review: the review API expects the document
/// wrapped under a `review` key and checks key presence, so absent optionals
/// serialize as null instead of being omitted.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewPayload {
    pub review: ReviewDoc,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewDoc {
    pub name: String,
    pub dealership: i64,
    pub review: String,
    pub purchase: bool,
    pub purchase_date: Option<String>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i32>,
}

/// Response descriptor for a review POST.
#[derive(Debug, Clone)]
pub struct PostResponse {
    pub status: u16,
    pub body: String,
}
