pub mod handler;
pub mod summarize;
