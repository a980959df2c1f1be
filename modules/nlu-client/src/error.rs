use thiserror::Error;

pub type Result<T> = std::result::Result<T, NluError>;

#[derive(Debug, Error)]
pub enum NluError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("NLU error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for NluError {
    fn from(err: reqwest::Error) -> Self {
        NluError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for NluError {
    fn from(err: serde_json::Error) -> Self {
        NluError::Parse(err.to_string())
    }
}
