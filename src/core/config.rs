use std::env;
use std::num::NonZeroUsize;

/// Rows per chunk sent to the model in a single prompt.
pub const DEFAULT_CHUNK_ROWS: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Bedrock text-completion model used unless overridden.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-v2";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub report_bucket: String,
    pub report_key: String,
    pub sender_email: String,
    pub recipient_email: String,
    pub model_id: String,
    pub chunk_rows: NonZeroUsize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            report_bucket: env::var("REPORT_BUCKET")
                .map_err(|e| format!("REPORT_BUCKET: {}", e))?,
            report_key: env::var("REPORT_KEY").map_err(|e| format!("REPORT_KEY: {}", e))?,
            sender_email: env::var("SENDER_EMAIL").map_err(|e| format!("SENDER_EMAIL: {}", e))?,
            recipient_email: env::var("RECIPIENT_EMAIL")
                .map_err(|e| format!("RECIPIENT_EMAIL: {}", e))?,
            model_id: env::var("BEDROCK_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            chunk_rows: match env::var("CHUNK_ROWS") {
                Ok(raw) => raw
                    .parse::<NonZeroUsize>()
                    .map_err(|e| format!("CHUNK_ROWS: {}", e))?,
                Err(_) => DEFAULT_CHUNK_ROWS,
            },
        })
    }
}
