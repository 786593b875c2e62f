//! Object-storage access for the source report.

use aws_sdk_s3::Client;
use tracing::info;

use crate::errors::PipelineError;

pub struct ReportStore {
    client: Client,
    bucket: String,
    key: String,
}

impl ReportStore {
    pub fn new(client: Client, bucket: String, key: String) -> Self {
        Self {
            client,
            bucket,
            key,
        }
    }

    /// Fetch the full report object as bytes. Fetched once per invocation;
    /// the buffer is reused for both parsing and the email attachment.
    pub async fn fetch(&self) -> Result<Vec<u8>, PipelineError> {
        info!("Fetching report s3://{}/{}", self.bucket, self.key);

        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
            .map_err(|e| {
                PipelineError::Retrieval(format!(
                    "failed to read object from s3://{}/{}: {}",
                    self.bucket, self.key, e
                ))
            })?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| PipelineError::Retrieval(format!("failed to read object body: {}", e)))?;

        let bytes = data.into_bytes().to_vec();
        info!("Fetched {} bytes", bytes.len());
        Ok(bytes)
    }
}
