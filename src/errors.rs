use thiserror::Error;

/// Errors raised by the report pipeline, one variant per stage that can fail.
///
/// Only `MailSend` is handled gracefully (the handler converts it into a 500
/// response); every other variant propagates out of the Lambda handler and
/// aborts the invocation.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to retrieve report from storage: {0}")]
    Retrieval(String),

    #[error("Failed to parse spreadsheet: {0}")]
    Parse(String),

    #[error("Failed to generate summary from model: {0}")]
    ModelInference(String),

    #[error("Failed to send report email: {0}")]
    MailSend(String),
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::ModelInference(format!("Malformed model payload: {}", error))
    }
}
