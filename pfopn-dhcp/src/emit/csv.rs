use std::path::Path;

use crate::reservation::{Reservation, CSV_COLUMNS};

use super::{write_artifact, EmitError, EmitOutcome};

const LINE_END: &str = "\r\n";

/// Render reservations as CSV with a header row.
pub fn render_csv(reservations: &[Reservation]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_COLUMNS);
    for reservation in reservations {
        push_row(&mut out, reservation.csv_fields());
    }
    out
}

/// Write the CSV export. Nothing is written for an empty input.
pub fn write_csv(reservations: &[Reservation], path: &Path) -> Result<EmitOutcome, EmitError> {
    if reservations.is_empty() {
        return Ok(EmitOutcome::Skipped {
            reason: "no reservations to save".to_string(),
        });
    }
    write_artifact(path, &render_csv(reservations))?;
    Ok(EmitOutcome::Written {
        path: path.to_path_buf(),
        count: reservations.len(),
    })
}

fn push_row(out: &mut String, fields: [&str; 6]) {
    let escaped: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    out.push_str(&escaped.join(","));
    out.push_str(LINE_END);
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::emit::fixtures::{printer, thermostat};

    #[test]
    fn renders_header_and_printer_row() {
        let out = render_csv(&[printer()]);
        assert_eq!(
            out,
            "interface,mac,ip,hostname,description,cid\r\nlan,00:11:22:33:44:55,192.168.1.10,printer,,\r\n"
        );
    }

    #[test]
    fn quotes_fields_with_commas_and_quotes() {
        let out = render_csv(&[thermostat()]);
        let row = out.lines().nth(1).expect("data row");
        assert_eq!(
            row,
            "opt1,aa:bb:cc:dd:ee:01,10.0.20.50,,\"Thermostat \"\"hallway\"\", it's new\",01:aa:bb:cc:dd:ee:01"
        );
    }

    #[test]
    fn row_count_is_records_plus_header() {
        let out = render_csv(&[printer(), thermostat(), printer()]);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let outcome = write_csv(&[], &path).expect("write");
        assert!(matches!(outcome, EmitOutcome::Skipped { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn writes_file_and_reports_count() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let outcome = write_csv(&[printer(), thermostat()], &path).expect("write");
        assert_eq!(
            outcome,
            EmitOutcome::Written {
                path: path.clone(),
                count: 2
            }
        );
        let body = std::fs::read_to_string(&path).expect("read");
        assert!(body.starts_with("interface,mac,ip,hostname,description,cid\r\n"));
    }
}
