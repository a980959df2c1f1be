pub mod car_models;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod traits;

pub use config::Config;
pub use error::SubmitError;
pub use pipeline::ReviewPipeline;
pub use traits::{DealerSource, SentimentAnalyzer};
