//! Invocation result payloads returned to the Lambda caller.

use serde_json::{Value, json};

pub const SUCCESS_BODY: &str = "Email sent successfully";
pub const FAILURE_BODY: &str = "Failed to send email";

/// Payload returned when the mail API accepted the send.
pub fn success_payload() -> Value {
    json!({
        "statusCode": 200,
        "body": SUCCESS_BODY,
    })
}

/// Payload returned when the mail API rejected the send.
pub fn failure_payload() -> Value {
    json!({
        "statusCode": 500,
        "body": FAILURE_BODY,
    })
}
