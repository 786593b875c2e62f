//! Bedrock text-completion client.
//!
//! Encapsulates the model-inference API: one `InvokeModel` call per prompt,
//! fixed sampling parameters, completion text pulled from the JSON response.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::{Value, json};
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::info;

use crate::errors::PipelineError;

pub const MAX_OUTPUT_TOKENS: usize = 2048;
pub const TEMPERATURE: f64 = 0.5;
pub const TOP_P: f64 = 0.9;

const RETRY_BASE_MILLIS: u64 = 100;
const RETRY_ATTEMPTS: usize = 3;

/// Seam over the hosted text-generation model so the summarize loop can be
/// exercised with a scripted fake in tests.
#[async_trait]
pub trait TextGenerator {
    /// Send one prompt and return the model's completion text.
    async fn complete(&self, prompt: &str) -> Result<String, PipelineError>;
}

pub struct BedrockClient {
    client: Client,
    model_id: String,
}

impl BedrockClient {
    pub fn new(client: Client, model_id: String) -> Self {
        Self { client, model_id }
    }

    async fn invoke_once(&self, prompt: &str) -> Result<String, PipelineError> {
        #[cfg(feature = "debug-logs")]
        info!("Model prompt:\n{}", prompt);

        // Claude text-completion wire format: the instruction prompt goes
        // inside a Human/Assistant frame.
        let request_body = json!({
            "prompt": format!("\n\nHuman: {}\n\nAssistant:", prompt),
            "max_tokens_to_sample": MAX_OUTPUT_TOKENS,
            "temperature": TEMPERATURE,
            "top_p": TOP_P,
        });

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(serde_json::to_vec(&request_body)?))
            .send()
            .await
            .map_err(|e| PipelineError::ModelInference(format!("InvokeModel failed: {}", e)))?;

        let payload: Value = serde_json::from_slice(response.body().as_ref())?;

        payload
            .get("completion")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                PipelineError::ModelInference("no completion in model response".to_string())
            })
    }
}

#[async_trait]
impl TextGenerator for BedrockClient {
    async fn complete(&self, prompt: &str) -> Result<String, PipelineError> {
        info!(
            "Invoking model {} (~{} input tokens)",
            self.model_id,
            crate::prompt::estimate_tokens(prompt)
        );

        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_MILLIS)
            .map(jitter)
            .take(RETRY_ATTEMPTS);

        Retry::spawn(strategy, || self.invoke_once(prompt)).await
    }
}
