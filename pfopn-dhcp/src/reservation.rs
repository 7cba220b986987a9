use serde::{Deserialize, Serialize};

/// Column order of the tabular export.
pub const CSV_COLUMNS: [&str; 6] = ["interface", "mac", "ip", "hostname", "description", "cid"];

/// A static DHCP mapping lifted out of a pfSense `<dhcpd>` section.
///
/// `mac` and `ip` are always non-empty; optional fields are `None` when the
/// source leaf was missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub mac: String,
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    /// Tag of the `<dhcpd>` child the mapping was found under (`lan`, `opt1`, ...).
    pub interface: String,
}

impl Reservation {
    /// Values in [`CSV_COLUMNS`] order, with absent fields as empty strings.
    pub fn csv_fields(&self) -> [&str; 6] {
        [
            self.interface.as_str(),
            self.mac.as_str(),
            self.ip.as_str(),
            self.hostname.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
            self.cid.as_deref().unwrap_or(""),
        ]
    }

    /// Short human label: hostname when set, MAC otherwise.
    pub fn label(&self) -> &str {
        self.hostname.as_deref().unwrap_or(&self.mac)
    }
}
