use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "picker",
    about = "Swipe through restaurants and pick up to four.",
    after_help = "Reads commands from stdin; type `help` once running."
)]
pub struct Args {
    /// RON configuration file. Missing file means defaults.
    #[arg(long, default_value = "picker.ron")]
    pub config: PathBuf,

    /// Catalog location (path or http(s) URL); overrides the config file.
    #[arg(long)]
    pub source: Option<String>,

    /// Where log output goes; overrides the config file.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}
