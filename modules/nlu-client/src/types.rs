use serde::{Deserialize, Serialize};

use lotview_common::SentimentLabel;

// --- Request ---

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeRequest<'a> {
    pub text: &'a str,
    pub features: Features,
}

#[derive(Debug, Serialize)]
pub(crate) struct Features {
    pub sentiment: SentimentOptions,
}

/// Serializes to `{}`; the service only needs the feature key present.
#[derive(Debug, Serialize)]
pub(crate) struct SentimentOptions {}

// --- Response ---

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeResponse {
    pub sentiment: Option<SentimentResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SentimentResult {
    pub document: Option<DocumentSentiment>,
}

/// Document-level sentiment as returned by the analyze endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSentiment {
    pub label: String,
    pub score: Option<f64>,
}

impl DocumentSentiment {
    /// Map the provider label onto the fixed label set. Anything the
    /// provider invents beyond positive/negative reads as Neutral.
    pub fn sentiment(&self) -> SentimentLabel {
        match self.label.as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}
