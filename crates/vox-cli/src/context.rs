use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use vox_config::VoxConfig;
use vox_parser::VoiceParser;

/// Everything a command handler needs: the loaded config, the interpreters
/// compiled from its lexicon, and the clock.
#[derive(Debug)]
pub struct AppContext {
    pub config: VoxConfig,
    pub parser: VoiceParser,
    fixed_now: Option<NaiveDateTime>,
}

impl AppContext {
    pub fn init(config: VoxConfig, fixed_now: Option<NaiveDateTime>) -> anyhow::Result<Self> {
        let parser =
            VoiceParser::new(&config.lexicon).context("failed to compile the configured lexicon")?;
        Ok(Self {
            config,
            parser,
            fixed_now,
        })
    }

    /// `--now` when given, otherwise the local wall clock.
    pub fn now(&self) -> NaiveDateTime {
        self.fixed_now
            .unwrap_or_else(|| Local::now().naive_local())
    }
}
