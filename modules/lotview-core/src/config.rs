use std::env;

/// Application configuration loaded from environment variables.
/// Service URLs and credentials live here and only here: clients receive
/// them at construction, never from module-level constants.
#[derive(Debug, Clone)]
pub struct Config {
    // External dealership/review services
    pub dealer_api_url: String,
    pub review_api_url: String,

    // NLU sentiment service
    pub nlu_url: String,
    pub nlu_api_key: String,

    // Car-model reference store (web layer's database); optional because the
    // pipeline itself never touches it
    pub database_url: Option<String>,

    // Outbound HTTP
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            dealer_api_url: required_env("DEALER_API_URL"),
            review_api_url: required_env("REVIEW_API_URL"),
            nlu_url: required_env("NLU_URL"),
            nlu_api_key: required_env("NLU_API_KEY"),
            database_url: env::var("DATABASE_URL").ok(),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .expect("HTTP_TIMEOUT_SECS must be a number"),
        }
    }

    /// Log the loaded configuration with secrets reduced to previews.
    pub fn log_redacted(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  DEALER_API_URL: {}", self.dealer_api_url);
        tracing::info!("  REVIEW_API_URL: {}", self.review_api_url);
        tracing::info!("  NLU_URL: {}", self.nlu_url);
        tracing::info!("  NLU_API_KEY: {}", preview(&self.nlu_api_key));
        tracing::info!(
            "  DATABASE_URL: {}",
            if self.database_url.is_some() {
                "<set>"
            } else {
                "<not set>"
            }
        );
        tracing::info!("  HTTP_TIMEOUT_SECS: {}", self.http_timeout_secs);
    }
}

fn preview(val: &str) -> String {
    let n = val.len().min(5);
    format!("{}...({} chars)", &val[..n], val.len())
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
