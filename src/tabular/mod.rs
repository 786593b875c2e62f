//! In-memory table decoded from the spreadsheet, plus row chunking.

pub mod parser;

pub type Row = Vec<String>;

/// Row/column structure decoded from the fetched workbook. The first
/// worksheet's rows, in sheet order, with every cell rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Non-overlapping windows of `window` consecutive rows, in row order;
    /// the last window holds the remainder. An empty table yields no chunks.
    /// The iterator is lazy and can be recreated by calling again.
    pub fn chunks(&self, window: std::num::NonZeroUsize) -> std::slice::Chunks<'_, Row> {
        self.rows.chunks(window.get())
    }
}

/// Render rows to the textual form embedded in model prompts, one line per
/// row, cells joined with `" | "`.
pub fn render_rows(rows: &[Row]) -> String {
    let mut rendered = String::new();
    for row in rows {
        rendered.push_str(&row.join(" | "));
        rendered.push('\n');
    }
    rendered
}
