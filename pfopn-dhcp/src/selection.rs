use std::fmt::{self, Display, Formatter};

/// One output artifact type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
    ApiScript,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::ApiScript => "api",
        };
        f.write_str(name)
    }
}

/// Which writers a run should invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub csv: bool,
    pub json: bool,
    pub api: bool,
}

impl Selection {
    /// Build from the CLI flags. With no individual format requested, or with
    /// `all` set, every format is selected.
    pub fn from_flags(csv: bool, json: bool, api: bool, all: bool) -> Self {
        if all || !(csv || json || api) {
            return Self::all();
        }
        Self { csv, json, api }
    }

    pub fn all() -> Self {
        Self {
            csv: true,
            json: true,
            api: true,
        }
    }

    /// Selected formats in run order.
    pub fn formats(&self) -> Vec<Format> {
        [
            (self.csv, Format::Csv),
            (self.json, Format::Json),
            (self.api, Format::ApiScript),
        ]
        .into_iter()
        .filter_map(|(on, format)| on.then_some(format))
        .collect()
    }
}
