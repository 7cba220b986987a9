use colored::Colorize;

use crate::emit::EmitOutcome;
use crate::extract::DhcpScan;
use crate::selection::Format;

/// Guidance printed after a successful export.
pub const NEXT_STEPS: [&str; 3] = [
    "Review the generated files and check that the data is correct",
    "For API import, edit the .sh file with your OPNsense credentials",
    "Run the API script, or import the data manually from the CSV/JSON files",
];

/// Per-interface progress lines for a scan.
pub fn render_scan(scan: &DhcpScan) -> String {
    let mut out = Vec::new();
    for iface in &scan.interfaces {
        out.push(format!("Processing interface: {}", iface.name.bold()));
        for r in &iface.reservations {
            out.push(format!("  Found reservation: {} -> {}", r.mac, r.ip));
        }
    }
    out.join("\n")
}

/// One status line (two for the API script) describing a writer outcome.
pub fn render_outcome(format: Format, outcome: &EmitOutcome) -> String {
    match (format, outcome) {
        (_, EmitOutcome::Skipped { reason }) => capitalize(reason).yellow().to_string(),
        (Format::ApiScript, EmitOutcome::Written { path, .. }) => format!(
            "Generated API commands in {}\n{}",
            path.display(),
            "IMPORTANT: edit the file with your API details before running it!"
                .yellow()
                .bold()
        ),
        (_, EmitOutcome::Written { path, count }) => {
            format!("Saved {count} reservations to {}", path.display())
        }
    }
}

pub fn render_next_steps() -> String {
    let mut out = vec!["Next steps:".bold().to_string()];
    for (idx, step) in NEXT_STEPS.iter().enumerate() {
        out.push(format!("{}. {step}", idx + 1));
    }
    out.join("\n")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
