use std::path::Path;

use config_tree::{parse_file, ConfigNode, ParseError};
use tracing::{debug, warn};

use crate::reservation::Reservation;

/// Static mappings found under one `<dhcpd>` interface node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceScan {
    pub name: String,
    pub reservations: Vec<Reservation>,
    /// `<staticmap>` entries dropped for lacking a MAC or IP address.
    pub skipped: usize,
}

/// Result of walking a configuration's `<dhcpd>` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DhcpScan {
    pub interfaces: Vec<InterfaceScan>,
    /// Set when the document could not be loaded and the scan is empty as a result.
    pub load_error: Option<String>,
}

impl DhcpScan {
    /// All reservations, interface-major then in `<staticmap>` order.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.interfaces
            .iter()
            .flat_map(|iface| iface.reservations.iter().cloned())
            .collect()
    }

    pub fn reservation_count(&self) -> usize {
        self.interfaces.iter().map(|i| i.reservations.len()).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.interfaces.iter().map(|i| i.skipped).sum()
    }
}

/// Scan every interface under `<dhcpd>` for static mappings.
///
/// A document without a `<dhcpd>` section yields an empty scan.
pub fn scan_dhcp(root: &ConfigNode) -> DhcpScan {
    let Some(dhcpd) = root.child("dhcpd") else {
        debug!(root = %root.tag, "no dhcpd section");
        return DhcpScan::default();
    };

    let interfaces = dhcpd.children.iter().map(scan_interface).collect();
    DhcpScan {
        interfaces,
        load_error: None,
    }
}

fn scan_interface(iface: &ConfigNode) -> InterfaceScan {
    let mut scan = InterfaceScan {
        name: iface.tag.clone(),
        ..InterfaceScan::default()
    };

    for staticmap in iface.children_named("staticmap") {
        match reservation_from(staticmap, &iface.tag) {
            Some(reservation) => scan.reservations.push(reservation),
            None => {
                debug!(interface = %iface.tag, "skipping staticmap without mac/ipaddr");
                scan.skipped += 1;
            }
        }
    }

    debug!(
        interface = %scan.name,
        found = scan.reservations.len(),
        skipped = scan.skipped,
        "scanned interface"
    );
    scan
}

fn reservation_from(staticmap: &ConfigNode, interface: &str) -> Option<Reservation> {
    let mac = staticmap.leaf("mac")?;
    let ip = staticmap.leaf("ipaddr")?;
    let optional = |tag: &str| staticmap.leaf(tag).map(str::to_string);

    Some(Reservation {
        mac: mac.to_string(),
        ip: ip.to_string(),
        hostname: optional("hostname"),
        description: optional("descr"),
        cid: optional("cid"),
        interface: interface.to_string(),
    })
}

/// Load a configuration file and scan it.
///
/// Read and parse failures do not propagate: they are logged and produce an
/// empty scan with [`DhcpScan::load_error`] set, so the caller ends up on its
/// normal "no reservations" path.
pub fn load_reservations(path: &Path) -> DhcpScan {
    match parse_file(path) {
        Ok(root) => scan_dhcp(&root),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not load configuration");
            DhcpScan {
                interfaces: Vec::new(),
                load_error: Some(describe_load_error(&err)),
            }
        }
    }
}

fn describe_load_error(err: &ParseError) -> String {
    match err {
        ParseError::Io(_) => format!("could not read file: {err}"),
        _ => format!("XML parse error: {err}"),
    }
}
