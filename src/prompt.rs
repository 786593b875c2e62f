//! Prompt templates for the chunk and combination model calls.

use tracing::warn;

/// Estimated-token ceiling for a single prompt. Rendered chunk text that
/// blows past this is hard-truncated rather than rejected, since the model
/// cannot accept it either way.
pub const MAX_INPUT_TOKENS: usize = 90_000;

/// Rough token estimate: ~4 characters per token, never zero.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Prompt for summarizing one chunk of rendered rows.
pub fn chunk_prompt(rendered_rows: &str) -> String {
    format!(
        "Summarize the following spreadsheet rows as a bulleted list, one bullet per line:\n\n{}",
        clamp_to_input_budget(rendered_rows)
    )
}

/// Prompt for combining the concatenated partial summaries into one overall
/// summary.
pub fn combine_prompt(partial_summaries: &str) -> String {
    format!(
        "Combine these partial summaries into one overall summary of the report:\n\n{}",
        clamp_to_input_budget(partial_summaries)
    )
}

/// Truncate `text` so its estimated token count stays within
/// [`MAX_INPUT_TOKENS`]. Truncation lands on a char boundary.
fn clamp_to_input_budget(text: &str) -> &str {
    if estimate_tokens(text) <= MAX_INPUT_TOKENS {
        return text;
    }

    let budget_chars = MAX_INPUT_TOKENS * 4;
    let cut = text
        .char_indices()
        .nth(budget_chars)
        .map_or(text.len(), |(i, _)| i);
    warn!(
        "Prompt text exceeds input budget (~{} tokens), truncating to {} chars",
        estimate_tokens(text),
        cut
    );
    &text[..cut]
}
