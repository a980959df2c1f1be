use dealer_client::DealerApiError;
use thiserror::Error;

/// Failure modes of a review submission, kept distinct so the presentation
/// layer can re-prompt on validation problems and show a retry message on
/// API problems.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Review submission failed: {0}")]
    Api(#[from] DealerApiError),
}
