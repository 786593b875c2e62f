//! sheetbrief - a Lambda that turns an uploaded spreadsheet into an emailed
//! summary.
//!
//! On each trigger the function fetches a configured Excel report from S3,
//! decodes it into rows, summarizes the rows in fixed-size chunks through a
//! Bedrock text-completion model, combines the partial summaries with one
//! final model call, and emails the result through SES with the original
//! file attached.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - S3 for report storage
//! - calamine for spreadsheet decoding
//! - Bedrock for text generation
//! - SES for email delivery
//! - Tokio for async runtime

pub mod ai;
pub mod core;
pub mod errors;
pub mod mail;
pub mod prompt;
pub mod storage;
pub mod tabular;
pub mod worker;

pub use errors::PipelineError;
pub use prompt::estimate_tokens;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at the start of the Lambda process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
