//! Chunked map/reduce summarization of the parsed table.

use std::num::NonZeroUsize;

use tracing::info;

use crate::ai::client::TextGenerator;
use crate::errors::PipelineError;
use crate::prompt::{chunk_prompt, combine_prompt};
use crate::tabular::{Table, render_rows};

/// Summary used when the workbook parses but holds no data rows. No model
/// calls are made in that case; the email is still sent.
pub const EMPTY_TABLE_SUMMARY: &str = "The report contains no data rows.";

/// Summarize the table chunk by chunk, then combine the partial summaries
/// into one overall summary with a final model call.
///
/// Chunks are processed strictly in row order, one blocking call at a time.
/// One partial summary is collected per chunk; the combination prompt
/// receives their plain concatenation, so row order is preserved end to end.
pub async fn summarize_table<G>(
    model: &G,
    table: &Table,
    window: NonZeroUsize,
) -> Result<String, PipelineError>
where
    G: TextGenerator + Sync,
{
    if table.is_empty() {
        info!("Table has no rows, skipping model calls");
        return Ok(EMPTY_TABLE_SUMMARY.to_string());
    }

    let mut partial_summaries: Vec<String> = Vec::new();
    for (index, chunk) in table.chunks(window).enumerate() {
        info!("Summarizing chunk {} ({} rows)", index, chunk.len());
        let prompt = chunk_prompt(&render_rows(chunk));
        let partial = model.complete(&prompt).await?;
        partial_summaries.push(partial);
    }

    info!(
        "Combining {} partial summaries into the final summary",
        partial_summaries.len()
    );
    let prompt = combine_prompt(&partial_summaries.concat());
    model.complete(&prompt).await
}
