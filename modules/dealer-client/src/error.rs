use thiserror::Error;

pub type Result<T> = std::result::Result<T, DealerApiError>;

#[derive(Debug, Error)]
pub enum DealerApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for DealerApiError {
    fn from(err: reqwest::Error) -> Self {
        DealerApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for DealerApiError {
    fn from(err: serde_json::Error) -> Self {
        DealerApiError::Parse(err.to_string())
    }
}
