use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ext_adapt::target::TargetBrowser;

#[derive(Parser, Debug)]
#[command(name = "ext-adapt")]
#[command(about = "Adapt packaged browser extensions to another manifest version and browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Rewrite packed extensions for a target browser.
    Adapt(AdaptArgs),
    /// Show the manifest or entry list of one package.
    Inspect(InspectArgs),
    /// Preview the manifest changes an adaptation would make.
    Diff(DiffArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct AdaptArgs {
    /// Target browser (firefox or opera, any case). Nothing is done when omitted.
    #[arg(long, value_parser = clap::value_parser!(TargetBrowser))]
    pub browser: Option<TargetBrowser>,
    /// Directory holding packed extensions. Nothing is done when it is missing.
    #[arg(long = "o", value_name = "DIR", default_value = "dist_packed")]
    pub packed_dir: PathBuf,
    /// Package path template containing `{version}`, e.g. `reader-{version}.zip`.
    #[arg(long = "i", value_name = "TEMPLATE")]
    pub template: String,
    /// Also adapt the `-source` package (manifest read from dist/manifest.json).
    #[arg(long)]
    pub source: bool,
    /// package.json providing the version substituted into the template.
    #[arg(long, default_value = "package.json")]
    pub package_json: PathBuf,
    /// Optional TOML file overriding the built-in target profiles.
    #[arg(long)]
    pub profiles_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Package to read.
    pub package: PathBuf,
    /// Manifest entry inside the package.
    #[arg(long, default_value = "manifest.json", conflicts_with = "entries")]
    pub entry: String,
    /// List archive entries instead of printing the manifest.
    #[arg(long)]
    pub entries: bool,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Package to read.
    pub package: PathBuf,
    /// Target browser (firefox or opera, any case).
    #[arg(long, value_parser = clap::value_parser!(TargetBrowser))]
    pub browser: TargetBrowser,
    /// Manifest entry inside the package.
    #[arg(long, default_value = "manifest.json")]
    pub entry: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print only change counts.
    #[arg(long)]
    pub summary: bool,
    /// Optional TOML file overriding the built-in target profiles.
    #[arg(long)]
    pub profiles_file: Option<PathBuf>,
}
