use std::num::NonZeroUsize;
use std::sync::Mutex;

use async_trait::async_trait;
use sheetbrief::ai::client::TextGenerator;
use sheetbrief::errors::PipelineError;
use sheetbrief::tabular::Table;
use sheetbrief::worker::summarize::{EMPTY_TABLE_SUMMARY, summarize_table};

/// Scripted model: records every prompt it receives and answers "S0", "S1",
/// ... in call order.
struct FakeModel {
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeModel {
    async fn complete(&self, prompt: &str) -> Result<String, PipelineError> {
        let mut prompts = self.prompts.lock().unwrap();
        let reply = format!("S{}", prompts.len());
        prompts.push(prompt.to_string());
        Ok(reply)
    }
}

/// Model that fails on every call, standing in for quota/network errors.
struct FailingModel;

#[async_trait]
impl TextGenerator for FailingModel {
    async fn complete(&self, _prompt: &str) -> Result<String, PipelineError> {
        Err(PipelineError::ModelInference("quota exceeded".to_string()))
    }
}

fn window(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn table_with_rows(n: usize) -> Table {
    Table::from_rows((0..n).map(|i| vec![format!("row-{}", i)]).collect())
}

/// 2500 rows at window 1000: three chunk calls plus one combination call.
#[tokio::test]
async fn test_2500_rows_make_exactly_four_model_calls() {
    let model = FakeModel::new();
    let table = table_with_rows(2500);

    let summary = summarize_table(&model, &table, window(1000)).await.unwrap();

    let prompts = model.recorded_prompts();
    assert_eq!(prompts.len(), 4);
    // The last reply is the combination call's completion.
    assert_eq!(summary, "S3");
}

/// The combination prompt receives the partial summaries concatenated in
/// chunk order with no separator.
#[tokio::test]
async fn test_combination_prompt_concatenates_partials_in_order() {
    let model = FakeModel::new();
    let table = table_with_rows(2500);

    summarize_table(&model, &table, window(1000)).await.unwrap();

    let prompts = model.recorded_prompts();
    assert!(
        prompts[3].contains("S0S1S2"),
        "combination prompt should hold the concatenated partials: {}",
        prompts[3]
    );
    assert!(prompts[3].contains("Combine these partial summaries"));
}

/// Each chunk prompt embeds that chunk's rows, in row order.
#[tokio::test]
async fn test_chunk_prompts_embed_their_rows() {
    let model = FakeModel::new();
    let table = table_with_rows(5);

    summarize_table(&model, &table, window(2)).await.unwrap();

    let prompts = model.recorded_prompts();
    // 3 chunk calls + 1 combination call
    assert_eq!(prompts.len(), 4);
    assert!(prompts[0].contains("row-0") && prompts[0].contains("row-1"));
    assert!(prompts[1].contains("row-2") && prompts[1].contains("row-3"));
    assert!(prompts[2].contains("row-4"));
    assert!(!prompts[0].contains("row-2"));
}

/// An empty table short-circuits: no model calls, fixed summary.
#[tokio::test]
async fn test_empty_table_skips_model_calls() {
    let model = FakeModel::new();
    let table = table_with_rows(0);

    let summary = summarize_table(&model, &table, window(1000)).await.unwrap();

    assert_eq!(summary, EMPTY_TABLE_SUMMARY);
    assert!(model.recorded_prompts().is_empty());
}

/// A model failure aborts summarization; nothing is salvaged.
#[tokio::test]
async fn test_model_error_propagates() {
    let table = table_with_rows(10);

    let result = summarize_table(&FailingModel, &table, window(4)).await;

    assert!(matches!(result, Err(PipelineError::ModelInference(_))));
}
