use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Interpret a task-creation utterance into a draft.
    Parse(TextArgs),
    /// Interpret an utterance and add the task to a task file.
    Add(AddArgs),
    /// Interpret a query utterance into a filter.
    Query(TextArgs),
    /// Apply a query utterance to a task file.
    Filter(FilterArgs),
    /// Show the effective lexicon.
    Lexicon(LexiconArgs),
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

/// The words of an utterance, joined with single spaces.
#[derive(Clone, Debug, Args)]
pub struct TextArgs {
    /// Utterance text (quoting is optional)
    #[arg(required = true)]
    pub text: Vec<String>,
}

impl TextArgs {
    pub fn utterance(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// JSON task file; created when missing
    #[arg(long)]
    pub tasks: PathBuf,
    #[command(flatten)]
    pub utterance: TextArgs,
}

#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    /// JSON task file to filter
    #[arg(long)]
    pub tasks: PathBuf,
    #[arg(long)]
    pub limit: Option<u32>,
    #[command(flatten)]
    pub utterance: TextArgs,
}

#[derive(Clone, Debug, Args)]
pub struct LexiconArgs {
    /// Print as a TOML config document
    #[arg(long)]
    pub toml: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

/// Output types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Parse,
    Query,
    Filter,
    Task,
    Lexicon,
}
