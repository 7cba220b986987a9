use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use pfopn_dhcp::api_settings::{default_api_settings, load_api_settings, ApiSettings};
use pfopn_dhcp::emit::{write_api_script, write_csv, write_json, ArtifactPaths};
use pfopn_dhcp::extract::load_reservations;
use pfopn_dhcp::report::{render_next_steps, render_outcome, render_scan};
use pfopn_dhcp::selection::{Format, Selection};
use pfopn_dhcp::summary;
use tracing::debug;

use crate::cli::Cli;
use crate::path_guard;

pub fn run_export(args: Cli) -> Result<()> {
    if !args.input.exists() {
        bail!("input file {} not found", args.input.display());
    }

    let selection = Selection::from_flags(args.csv, args.json, args.api, args.all);
    let paths = ArtifactPaths::from_prefix(&args.output);
    let selected: Vec<&Path> = selection
        .formats()
        .into_iter()
        .map(|format| artifact_path(&paths, format))
        .collect();
    path_guard::ensure_outputs_differ(&args.input, &selected)?;

    let settings = if selection.api {
        resolve_api_settings(args.api_settings.as_deref())
    } else {
        if let Some(path) = &args.api_settings {
            println!(
                "{} --api-settings {} has no effect without --api",
                "warning:".yellow().bold(),
                path.display()
            );
        }
        ApiSettings::default()
    };

    println!("Analyzing {}...", args.input.display());
    let scan = load_reservations(&args.input);
    if let Some(err) = &scan.load_error {
        println!("{} {err}", "warning:".yellow().bold());
    }
    let progress = render_scan(&scan);
    if !progress.is_empty() {
        println!("{progress}");
    }

    let reservations = scan.reservations();
    if reservations.is_empty() {
        bail!("no DHCP reservations found in {}", args.input.display());
    }
    println!(
        "{}",
        format!("Found {} DHCP reservations", reservations.len()).green()
    );

    let mut outcomes = Vec::new();
    for format in selection.formats() {
        let path = artifact_path(&paths, format);
        let outcome = match format {
            Format::Csv => write_csv(&reservations, path),
            Format::Json => write_json(&reservations, path),
            Format::ApiScript => write_api_script(&reservations, &settings, path),
        }
        .with_context(|| format!("failed to write {format} output"))?;
        debug!(%format, ?outcome, "writer finished");
        println!("{}", render_outcome(format, &outcome));
        outcomes.push(outcome);
    }

    println!();
    println!("{}", "Export complete!".green().bold());
    println!("{}", summary::render(&summary::summarize(&scan, &outcomes)).cyan());
    println!();
    println!("{}", render_next_steps());
    Ok(())
}

fn artifact_path(paths: &ArtifactPaths, format: Format) -> &Path {
    match format {
        Format::Csv => &paths.csv,
        Format::Json => &paths.json,
        Format::ApiScript => &paths.api_script,
    }
}

fn resolve_api_settings(path: Option<&Path>) -> ApiSettings {
    let Some(path) = path else {
        return default_api_settings();
    };
    match load_api_settings(path) {
        Ok(settings) => {
            debug!(path = %path.display(), "loaded API settings");
            settings
        }
        Err(err) => {
            println!(
                "{} {err}; using embedded defaults",
                "warning:".yellow().bold()
            );
            default_api_settings()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::resolve_api_settings;
    use pfopn_dhcp::api_settings::ApiSettings;

    #[test]
    fn unreadable_settings_fall_back_to_embedded() {
        let dir = tempdir().expect("tempdir");
        let settings = resolve_api_settings(Some(&dir.path().join("missing.toml")));
        assert_eq!(settings, ApiSettings::default());
    }

    #[test]
    fn settings_file_is_used_when_valid() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("api.toml");
        fs::write(&path, "[api]\napi_key = \"abc\"\n").expect("write");

        let settings = resolve_api_settings(Some(&path));
        assert_eq!(settings.api_key, "abc");
    }
}
