use std::path::Path;

use crate::api_settings::ApiSettings;
use crate::reservation::Reservation;

use super::{write_artifact, EmitError, EmitOutcome};

/// Interface every generated lease is assigned to, whatever interface the
/// reservation came from. Blocks for non-LAN reservations must be edited by
/// hand before the script is run.
pub const LEASE_INTERFACE: &str = "lan";

/// OPNsense API path every lease is posted to.
pub const LEASE_ENDPOINT: &str = "/api/dhcpv4/leases/addLease";

/// Render a bash script with one `curl` POST per reservation.
pub fn render_api_script(reservations: &[Reservation], settings: &ApiSettings) -> String {
    let mut lines = vec![
        "#!/bin/bash".to_string(),
        "# Import DHCP reservations into OPNsense through its API".to_string(),
        "# Edit the following variables with your own values:".to_string(),
        format!("OPNSENSE_HOST={}", shell_double_quoted(&settings.host)),
        format!("API_KEY={}", shell_double_quoted(&settings.api_key)),
        format!("API_SECRET={}", shell_double_quoted(&settings.api_secret)),
        String::new(),
    ];

    for (idx, reservation) in reservations.iter().enumerate() {
        lines.push(post_block(idx + 1, reservation));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Write the API script. Nothing is written for an empty input.
pub fn write_api_script(
    reservations: &[Reservation],
    settings: &ApiSettings,
    path: &Path,
) -> Result<EmitOutcome, EmitError> {
    if reservations.is_empty() {
        return Ok(EmitOutcome::Skipped {
            reason: "no reservations to generate commands for".to_string(),
        });
    }
    write_artifact(path, &render_api_script(reservations, settings))?;
    Ok(EmitOutcome::Written {
        path: path.to_path_buf(),
        count: reservations.len(),
    })
}

fn post_block(number: usize, reservation: &Reservation) -> String {
    let body = format!(
        r#"{{
    "lease": {{
      "interface": {interface},
      "mac": {mac},
      "ip": {ip},
      "hostname": {hostname},
      "description": {description}
    }}
  }}"#,
        interface = json_string(LEASE_INTERFACE),
        mac = json_string(&reservation.mac),
        ip = json_string(&reservation.ip),
        hostname = json_string(reservation.hostname.as_deref().unwrap_or("")),
        description = json_string(reservation.description.as_deref().unwrap_or("")),
    );

    format!(
        r#"# Reservation {number}: {label}
curl -X POST \
  "$OPNSENSE_HOST{LEASE_ENDPOINT}" \
  -H "Content-Type: application/json" \
  -u "$API_KEY:$API_SECRET" \
  -d '{body}'
"#,
        label = single_line(reservation.label()),
        body = body.replace('\'', r"'\''"),
    )
}

fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

fn shell_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

fn single_line(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}
