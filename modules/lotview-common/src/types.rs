use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// --- Sentiment ---

/// Document-level sentiment of a review body.
/// Defaults to Neutral: a review whose classification failed or was skipped
/// must still render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

// --- Dealers ---

/// A car dealership as served by the dealer API. Immutable once fetched;
/// the external API is the system of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: i64,
    pub full_name: String,
    pub short_name: String,
    pub address: String,
    pub city: String,
    pub st: String,
    pub zip: String,
    pub lat: f64,
    pub long: f64,
}

// --- Reviews ---

/// A sentiment-enriched dealership review. `dealership` is a foreign key by
/// value into the dealer API; reviews are never persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub dealership: i64,
    pub review: String,
    pub purchase: bool,
    pub purchase_date: Option<NaiveDate>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i32>,
    pub sentiment: SentimentLabel,
}

/// User-entered review data, as collected by the presentation layer before
/// validation. `purchase_date` stays a raw string until validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub dealership: i64,
    pub review: String,
    pub purchase: bool,
    pub purchase_date: Option<String>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i32>,
}

// --- Car reference data ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Sedan,
    Suv,
    Wagon,
    Sport,
    Coupe,
    Mini,
    Van,
    Pickup,
    Truck,
    Bike,
    Scooter,
    Other,
}

impl BodyType {
    /// Parse a stored body-type string. Unknown values map to Other rather
    /// than failing the row.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "sedan" => BodyType::Sedan,
            "suv" => BodyType::Suv,
            "wagon" => BodyType::Wagon,
            "sport" => BodyType::Sport,
            "coupe" => BodyType::Coupe,
            "mini" => BodyType::Mini,
            "van" => BodyType::Van,
            "pickup" => BodyType::Pickup,
            "truck" => BodyType::Truck,
            "bike" => BodyType::Bike,
            "scooter" => BodyType::Scooter,
            _ => BodyType::Other,
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyType::Sedan => write!(f, "Sedan"),
            BodyType::Suv => write!(f, "SUV"),
            BodyType::Wagon => write!(f, "Wagon"),
            BodyType::Sport => write!(f, "Sport"),
            BodyType::Coupe => write!(f, "Coupe"),
            BodyType::Mini => write!(f, "Mini"),
            BodyType::Van => write!(f, "Van"),
            BodyType::Pickup => write!(f, "Pickup"),
            BodyType::Truck => write!(f, "Truck"),
            BodyType::Bike => write!(f, "Bike"),
            BodyType::Scooter => write!(f, "Scooter"),
            BodyType::Other => write!(f, "Other"),
        }
    }
}

/// A selectable car model shown when composing a review. Read-only reference
/// data owned by the web layer's database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarModel {
    pub make: String,
    pub name: String,
    pub body: BodyType,
    pub year: i32,
    pub dealer_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_defaults_to_neutral() {
        assert_eq!(SentimentLabel::default(), SentimentLabel::Neutral);
    }

    #[test]
    fn sentiment_display_is_lowercase() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }

    #[test]
    fn body_type_parses_case_insensitively() {
        assert_eq!(BodyType::parse("SUV"), BodyType::Suv);
        assert_eq!(BodyType::parse("sedan"), BodyType::Sedan);
        assert_eq!(BodyType::parse("Pickup"), BodyType::Pickup);
    }

    #[test]
    fn unknown_body_type_maps_to_other() {
        assert_eq!(BodyType::parse("hovercraft"), BodyType::Other);
        assert_eq!(BodyType::parse(""), BodyType::Other);
    }
}
