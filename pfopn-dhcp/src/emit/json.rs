use std::path::Path;

use crate::reservation::Reservation;

use super::{write_artifact, EmitError, EmitOutcome};

/// Render reservations as an indented JSON array. Non-ASCII text is kept as-is.
pub fn render_json(reservations: &[Reservation]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reservations)
}

/// Write the JSON export.
///
/// Unlike the CSV and API writers this always produces a file, so an empty
/// input becomes `[]`.
pub fn write_json(reservations: &[Reservation], path: &Path) -> Result<EmitOutcome, EmitError> {
    let body = render_json(reservations).map_err(|source| EmitError::Json {
        path: path.display().to_string(),
        source,
    })?;
    write_artifact(path, &body)?;
    Ok(EmitOutcome::Written {
        path: path.to_path_buf(),
        count: reservations.len(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::emit::fixtures::{printer, thermostat};

    #[test]
    fn omits_absent_optional_fields() {
        let out = render_json(&[printer()]).expect("render");
        assert_eq!(
            out,
            r#"[
  {
    "mac": "00:11:22:33:44:55",
    "ip": "192.168.1.10",
    "hostname": "printer",
    "interface": "lan"
  }
]"#
        );
    }

    #[test]
    fn file_reads_back_equal() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.json");
        let records = vec![printer(), thermostat()];
        write_json(&records, &path).expect("write");

        let raw = std::fs::read_to_string(&path).expect("read");
        let back: Vec<Reservation> = serde_json::from_str(&raw).expect("decode");
        assert_eq!(back, records);
    }

    #[test]
    fn keeps_non_ascii_verbatim() {
        let mut r = printer();
        r.description = Some("Imprimante du salon – étage".to_string());
        let out = render_json(&[r]).expect("render");
        assert!(out.contains("Imprimante du salon – étage"));
        assert!(!out.contains("\\u"));
    }

    #[test]
    fn empty_input_still_writes_array() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.json");
        let outcome = write_json(&[], &path).expect("write");
        assert!(matches!(outcome, EmitOutcome::Written { count: 0, .. }));
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "[]");
    }
}
