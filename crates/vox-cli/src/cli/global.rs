use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Resolve `general.default_format`. Validation rejects unknown names at
    /// load time, so the json fall-back only covers hand-built configs.
    pub fn from_config(name: &str) -> Self {
        <Self as ValueEnum>::from_str(name, true).unwrap_or(Self::Json)
    }
}

/// When table output may use ANSI colors.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Global flags available before or after subcommands, with config
/// fall-backs already applied.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub color: ColorMode,
    pub now: Option<NaiveDateTime>,
}

const NOW_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse `--now`: a local date-time, or a bare date meaning midnight.
pub fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();
    for format in NOW_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| format!("expected YYYY-MM-DD[THH:MM[:SS]], got '{raw}'"))
}
