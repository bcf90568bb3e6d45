use clap::Parser;
use vox_config::GeneralConfig;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vox` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vox",
    version,
    about = "voxtask - turn spoken sentences into tasks and task queries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (default from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Reference time for relative dates, e.g. 2026-10-14T08:30
    #[arg(long, global = true, value_parser = global::parse_now)]
    pub now: Option<chrono::NaiveDateTime>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self, general: &GeneralConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(&general.default_format)),
            limit: self.limit,
            quiet: self.quiet,
            color: self.color,
            now: self.now,
        }
    }
}
