//! Report delivery over SES: one raw multipart message per invocation.

use aws_sdk_sesv2::Client;
use aws_sdk_sesv2::primitives::Blob;
use aws_sdk_sesv2::types::{Destination, EmailContent, RawMessage};
use mail_builder::MessageBuilder;
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::info;

use crate::errors::PipelineError;

const RETRY_BASE_MILLIS: u64 = 100;
const RETRY_ATTEMPTS: usize = 3;

pub struct ReportMailer {
    client: Client,
    sender: String,
    recipient: String,
}

impl ReportMailer {
    pub fn new(client: Client, sender: String, recipient: String) -> Self {
        Self {
            client,
            sender,
            recipient,
        }
    }

    /// Compose and send the summary email with the original report attached.
    /// Returns the SES message id on acceptance.
    pub async fn send_report(
        &self,
        subject: &str,
        text_body: &str,
        html_body: &str,
        attachment_name: &str,
        attachment: &[u8],
    ) -> Result<String, PipelineError> {
        let raw = build_raw_message(
            &self.sender,
            &self.recipient,
            subject,
            text_body,
            html_body,
            attachment_name,
            attachment,
        )?;

        info!(
            "Sending report email to {} ({} raw bytes)",
            self.recipient,
            raw.len()
        );

        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_MILLIS)
            .map(jitter)
            .take(RETRY_ATTEMPTS);

        Retry::spawn(strategy, || self.send_once(&raw)).await
    }

    async fn send_once(&self, raw: &[u8]) -> Result<String, PipelineError> {
        let raw_message = RawMessage::builder()
            .data(Blob::new(raw))
            .build()
            .map_err(|e| PipelineError::MailSend(e.to_string()))?;

        let response = self
            .client
            .send_email()
            .from_email_address(&self.sender)
            .destination(
                Destination::builder()
                    .to_addresses(&self.recipient)
                    .build(),
            )
            .content(EmailContent::builder().raw(raw_message).build())
            .send()
            .await
            .map_err(|e| PipelineError::MailSend(format!("SES rejected the send: {}", e)))?;

        Ok(response.message_id().unwrap_or_default().to_string())
    }
}

/// Build the raw MIME message: multipart/mixed wrapping a text/html
/// alternative pair plus the original workbook bytes as a named attachment.
/// The attachment is the fetched buffer verbatim, no transcoding.
pub fn build_raw_message(
    sender: &str,
    recipient: &str,
    subject: &str,
    text_body: &str,
    html_body: &str,
    attachment_name: &str,
    attachment: &[u8],
) -> Result<Vec<u8>, PipelineError> {
    let content_type = mime_guess::from_path(attachment_name)
        .first_or_octet_stream()
        .to_string();

    MessageBuilder::new()
        .from(sender)
        .to(recipient)
        .subject(subject)
        .text_body(text_body)
        .html_body(html_body)
        .attachment(content_type, attachment_name, attachment)
        .write_to_vec()
        .map_err(|e| PipelineError::MailSend(format!("failed to build MIME message: {}", e)))
}

/// Minimal HTML rendering of the plain-text summary for the alternative part.
pub fn html_report_body(summary: &str) -> String {
    let escaped = summary
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<html><body><p>{}</p></body></html>",
        escaped.replace('\n', "<br>")
    )
}
