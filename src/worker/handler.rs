//! Lambda entrypoint: fetch, parse, summarize, and email the report.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::ai::client::BedrockClient;
use crate::core::config::AppConfig;
use crate::core::response::{failure_payload, success_payload};
use crate::mail::{ReportMailer, html_report_body};
use crate::storage::ReportStore;
use crate::tabular::parser::parse_workbook;
use crate::worker::summarize::summarize_table;

/// Run one invocation of the pipeline. The trigger payload carries no
/// parameters and is ignored; everything comes from the environment.
///
/// Retrieval, parse, and model errors propagate out of the handler and abort
/// the invocation. Only a mail-send failure is caught and converted into the
/// graceful 500 response.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let _ = event.payload;

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = ReportStore::new(
        aws_sdk_s3::Client::new(&aws_config),
        config.report_bucket.clone(),
        config.report_key.clone(),
    );
    let model = BedrockClient::new(
        aws_sdk_bedrockruntime::Client::new(&aws_config),
        config.model_id.clone(),
    );
    let mailer = ReportMailer::new(
        aws_sdk_sesv2::Client::new(&aws_config),
        config.sender_email.clone(),
        config.recipient_email.clone(),
    );

    let report_bytes = store.fetch().await?;
    let table = parse_workbook(&report_bytes)?;
    info!(
        "Parsed {} rows from {}",
        table.row_count(),
        config.report_key
    );

    let summary = summarize_table(&model, &table, config.chunk_rows).await?;

    let attachment_name = config
        .report_key
        .rsplit('/')
        .next()
        .unwrap_or(&config.report_key);
    let subject = format!("Summary of {}", attachment_name);

    match mailer
        .send_report(
            &subject,
            &summary,
            &html_report_body(&summary),
            attachment_name,
            &report_bytes,
        )
        .await
    {
        Ok(message_id) => {
            info!("Email accepted, message id {}", message_id);
            Ok(success_payload())
        }
        Err(e) => {
            error!("Failed to send report email: {}", e);
            Ok(failure_payload())
        }
    }
}

pub use self::function_handler as handler;
