use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pfopn-dhcp")]
#[command(about = "Export pfSense DHCP static mappings for import into OPNsense")]
pub struct Cli {
    /// pfSense configuration XML file.
    pub input: PathBuf,
    /// Base name for the generated files.
    #[arg(short, long, default_value = "dhcp_reservations")]
    pub output: String,
    /// Write <output>.csv.
    #[arg(long)]
    pub csv: bool,
    /// Write <output>.json.
    #[arg(long)]
    pub json: bool,
    /// Write <output>_api.sh, a curl script for the OPNsense API.
    #[arg(long)]
    pub api: bool,
    /// Write every format (the default when no format flag is given).
    #[arg(long)]
    pub all: bool,
    /// TOML file with host, key and secret values for the API script.
    #[arg(long)]
    pub api_settings: Option<PathBuf>,
    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
