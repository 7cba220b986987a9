use std::path::PathBuf;

use crate::emit::EmitOutcome;
use crate::extract::DhcpScan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub interfaces: usize,
    pub reservations: usize,
    pub skipped: usize,
    pub written: Vec<PathBuf>,
}

pub fn summarize(scan: &DhcpScan, outcomes: &[EmitOutcome]) -> ExportSummary {
    ExportSummary {
        interfaces: scan.interfaces.len(),
        reservations: scan.reservation_count(),
        skipped: scan.total_skipped(),
        written: outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                EmitOutcome::Written { path, .. } => Some(path.clone()),
                EmitOutcome::Skipped { .. } => None,
            })
            .collect(),
    }
}

pub fn render(summary: &ExportSummary) -> String {
    let files: Vec<String> = summary
        .written
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    format!(
        "export_summary interfaces={} reservations={} skipped={} files={}",
        summary.interfaces,
        summary.reservations,
        summary.skipped,
        files.join(",")
    )
}
