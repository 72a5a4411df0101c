use anyhow::{Context, Result};
use clap::Parser;
use ext_adapt::report::{render_notes, render_summary, render_text};
use ext_adapt::transform::transform_with_profile;
use manifest_core::{diff, list_entries, read_manifest, write, DiffEntry, WriteStyle};
use tracing_subscriber::EnvFilter;

mod adapt;
mod cli;
mod path_guard;

use cli::{Cli, Command, DiffArgs, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Adapt(args) => adapt::run_adapt(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Diff(args) => run_diff(args),
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    if args.entries {
        let entries = list_entries(&args.package)
            .with_context(|| format!("failed to list {}", args.package.display()))?;
        for entry in entries {
            println!("{entry}");
        }
        return Ok(());
    }

    let manifest = read_manifest(&args.package, &args.entry)
        .with_context(|| format!("failed to read manifest from {}", args.package.display()))?;
    let pretty = write(&manifest, WriteStyle::Pretty)?;
    println!("{}", String::from_utf8_lossy(&pretty));
    Ok(())
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let profile = adapt::resolve_profile(args.profiles_file.as_deref(), args.browser)?;
    let source = read_manifest(&args.package, &args.entry)
        .with_context(|| format!("failed to read manifest from {}", args.package.display()))?;

    let adapted = transform_with_profile(&source, &profile);
    let entries = diff(&source, &adapted.manifest);

    if args.summary {
        println!("{}", render_summary(&entries));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_text(&entries));
            if !adapted.notes.is_empty() {
                println!();
                println!("{}", render_notes(&adapted.notes));
            }
        }
        OutputFormat::Json => {
            let report = DiffReport {
                browser: profile.browser.as_str(),
                manifest_version: profile.manifest_version.number(),
                entries: &entries,
                notes: &adapted.notes,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct DiffReport<'a> {
    browser: &'static str,
    manifest_version: u8,
    entries: &'a [DiffEntry],
    notes: &'a [ext_adapt::transform::TransformNote],
}
