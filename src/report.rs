//! Generic rendering helpers and machine-readable summaries

use serde::Serialize;
use std::fmt::Display;

use crate::counter::CounterReport;

/// Render items one per line, bulleted.
pub fn render_list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!(" - {item}"))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Render key/value pairs one per line as `key -> value`.
pub fn render_map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> String
where
    K: Display,
    V: Display,
{
    entries
        .into_iter()
        .map(|(key, value)| format!("{key} -> {value}"))
        .collect::<Vec<String>>()
        .join("\n")
}

/// JSON-friendly summary of a counter run.
#[derive(Debug, Serialize)]
pub struct CounterSummary {
    pub workers: usize,
    pub increments_per_worker: u64,
    pub expected: u64,
    pub value: u64,
    pub exact: bool,
}

impl From<&CounterReport> for CounterSummary {
    fn from(report: &CounterReport) -> Self {
        Self {
            workers: report.workers,
            increments_per_worker: report.increments_per_worker,
            expected: report.expected(),
            value: report.value,
            exact: report.is_exact(),
        }
    }
}
