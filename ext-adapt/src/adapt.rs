//! Package adaptation workflow.
//!
//! 1. **Preconditions**: packed directory present and `--browser` given,
//!    otherwise the run is a no-op
//! 2. **Profile**: built-in or `--profiles-file` profile for the browser
//! 3. **Naming**: package version from `package.json`, paths from the template
//! 4. **Primary package**: `manifest.json` transformed, written compact
//! 5. **Source package** (`--source`): `dist/manifest.json` transformed,
//!    written pretty-printed as `manifest.json`
//!
//! A missing input package is skipped with a warning. An archive that exists
//! but cannot be opened aborts the run.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ext_adapt::naming::PackagePaths;
use ext_adapt::package_version::read_package_version;
use ext_adapt::profile::{default_profiles, find_profile, load_profiles, TargetProfile};
use ext_adapt::target::TargetBrowser;
use ext_adapt::transform::transform_with_profile;
use manifest_core::{read_manifest, replace_entry, write, WriteStyle};
use tracing::{debug, info, warn};

use crate::cli::AdaptArgs;
use crate::path_guard::ensure_distinct_output;

/// Manifest entry of a built package.
pub const PACKAGE_MANIFEST_ENTRY: &str = "manifest.json";
/// Manifest entry of a source package.
pub const SOURCE_MANIFEST_ENTRY: &str = "dist/manifest.json";

/// How one package is read and written.
struct PackageJob<'a> {
    input: &'a Path,
    output: &'a Path,
    manifest_entry: &'a str,
    style: WriteStyle,
}

pub fn run_adapt(args: AdaptArgs) -> Result<()> {
    if !args.packed_dir.is_dir() {
        info!("No \"{}\" directory", args.packed_dir.display());
        return Ok(());
    }

    let Some(browser) = args.browser else {
        info!("Specify either --browser=firefox or --browser=opera");
        return Ok(());
    };

    let profile = resolve_profile(args.profiles_file.as_deref(), browser)?;
    let version = read_package_version(&args.package_json)
        .context("failed to determine package version")?;
    let paths = PackagePaths::resolve(&args.template, &version, browser)?;
    debug!(?paths, %browser, %version, "resolved package paths");

    adapt_package(
        &PackageJob {
            input: &paths.input,
            output: &paths.output,
            manifest_entry: PACKAGE_MANIFEST_ENTRY,
            style: WriteStyle::Compact,
        },
        &profile,
    )?;

    if args.source {
        adapt_package(
            &PackageJob {
                input: &paths.source_input,
                output: &paths.source_output,
                manifest_entry: SOURCE_MANIFEST_ENTRY,
                style: WriteStyle::Pretty,
            },
            &profile,
        )?;
    }

    Ok(())
}

/// Pick the profile for `browser`, preferring `profiles_file` when it loads.
pub fn resolve_profile(
    profiles_file: Option<&Path>,
    browser: TargetBrowser,
) -> Result<TargetProfile> {
    let profiles = match profiles_file {
        Some(path) => match load_profiles(path) {
            Ok(profiles) => profiles,
            Err(err) => {
                warn!("{err}; using embedded profiles");
                default_profiles()
            }
        },
        None => default_profiles(),
    };

    find_profile(&profiles, browser)
        .cloned()
        .ok_or_else(|| anyhow!("no target profile defined for browser '{browser}'"))
}

fn adapt_package(job: &PackageJob<'_>, profile: &TargetProfile) -> Result<()> {
    if !job.input.exists() {
        warn!("package {} not found; skipping", job.input.display());
        return Ok(());
    }
    ensure_distinct_output(job.output, job.input)?;

    let manifest = read_manifest(job.input, job.manifest_entry)
        .with_context(|| format!("failed to read manifest from {}", job.input.display()))?;

    let adapted = transform_with_profile(&manifest, profile);
    for note in &adapted.notes {
        warn!(package = %job.input.display(), "{note}");
    }

    let bytes = write(&adapted.manifest, job.style)?;
    replace_entry(job.input, job.output, PACKAGE_MANIFEST_ENTRY, &bytes)
        .with_context(|| format!("failed to write package {}", job.output.display()))?;

    println!("adapted {} -> {}", job.input.display(), job.output.display());
    Ok(())
}
