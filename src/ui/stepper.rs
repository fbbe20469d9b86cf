//! Pipeline stepper

use crate::pipeline::{StepKey, StepStatus};

/// One stepper row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub key: StepKey,
    pub label: &'static str,
    pub status: StepStatus,
    pub detail: Option<String>,
}

fn marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Idle => "[ ]",
        StepStatus::Pending => "[~]",
        StepStatus::Success => "[x]",
        StepStatus::Error => "[!]",
    }
}

/// Render rows as numbered lines: `1 [x] Batch created (success) Batch created.`
pub fn render_stepper(rows: &[StepRow]) -> Vec<String> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let mut line = format!(
                "{} {} {} ({})",
                index + 1,
                marker(row.status),
                row.label,
                row.status
            );
            if let Some(detail) = &row.detail {
                line.push(' ');
                line.push_str(detail);
            }
            line
        })
        .collect()
}
