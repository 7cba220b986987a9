//! Export pfSense DHCP static mappings for OPNsense.
//!
//! pfSense stores fixed MAC-to-IP bindings as `<staticmap>` entries under
//! each interface of its `<dhcpd>` section. This crate lifts them out of a
//! configuration backup and renders them in three forms an OPNsense admin can
//! work with:
//!
//! - CSV, one row per reservation;
//! - a JSON array of reservation objects;
//! - a bash script issuing one OPNsense API call per reservation.
//!
//! # Pipeline
//!
//! 1. [`extract`] walks the parsed [`config_tree::ConfigNode`] document and
//!    produces ordered [`reservation::Reservation`] records.
//! 2. [`emit`] renders and writes each selected format.
//! 3. [`report`] and [`summary`] produce the terminal output.
//!
//! # Examples
//!
//! ```ignore
//! use config_tree::parse_file;
//! use pfopn_dhcp::emit::render_csv;
//! use pfopn_dhcp::extract::scan_dhcp;
//!
//! let config = parse_file("config-fw.xml".as_ref())?;
//! let scan = scan_dhcp(&config);
//! print!("{}", render_csv(&scan.reservations()));
//! ```

pub mod api_settings;
pub mod emit;
pub mod extract;
pub mod report;
pub mod reservation;
pub mod selection;
pub mod summary;
