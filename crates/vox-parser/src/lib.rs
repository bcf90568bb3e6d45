//! # vox-parser
//!
//! Deterministic, rule-based interpreters for spoken or typed task text.
//!
//! - [`UtteranceInterpreter`] turns "urgent meeting tomorrow at 3pm" into a
//!   [`TaskDraft`](vox_core::TaskDraft).
//! - [`QueryInterpreter`] turns "show today's high priority tasks" into a
//!   [`FilterSpec`](vox_core::FilterSpec).
//!
//! Both consult one [`CompiledLexicon`], built once from a
//! [`Lexicon`](vox_core::Lexicon) and shared read-only. Interpreting never
//! fails: anything not understood falls back to a documented default.
//!
//! ```
//! use vox_parser::VoiceParser;
//!
//! let parser = VoiceParser::default();
//! let draft = parser.interpret("add a task to call mom");
//! assert_eq!(draft.name, "Call mom");
//! ```

pub mod datetime;
pub mod error;
pub mod matcher;
pub mod query;
pub mod text;
pub mod utterance;

pub use error::{DateParseError, ParserError};
pub use matcher::CompiledLexicon;
pub use query::QueryInterpreter;
pub use utterance::UtteranceInterpreter;

use std::sync::{Arc, LazyLock};

use chrono::{NaiveDate, NaiveDateTime};
use vox_core::{FilterSpec, Lexicon, TaskDraft};

static BUILTIN: LazyLock<VoiceParser> = LazyLock::new(VoiceParser::default);

/// Both interpreters over one shared lexicon.
#[derive(Debug, Clone, Default)]
pub struct VoiceParser {
    utterances: UtteranceInterpreter,
    queries: QueryInterpreter,
}

impl VoiceParser {
    /// Build interpreters over a caller-supplied lexicon.
    pub fn new(lexicon: &Lexicon) -> Result<Self, ParserError> {
        let compiled = Arc::new(CompiledLexicon::compile(lexicon)?);
        Ok(Self {
            utterances: UtteranceInterpreter::new(Arc::clone(&compiled)),
            queries: QueryInterpreter::new(compiled),
        })
    }

    #[must_use]
    pub fn interpret(&self, text: &str) -> TaskDraft {
        self.utterances.interpret(text)
    }

    #[must_use]
    pub fn interpret_at(&self, text: &str, now: NaiveDateTime) -> TaskDraft {
        self.utterances.interpret_at(text, now)
    }

    #[must_use]
    pub fn interpret_query(&self, text: &str) -> FilterSpec {
        self.queries.interpret_query(text)
    }

    #[must_use]
    pub fn interpret_query_at(&self, text: &str, today: NaiveDate) -> FilterSpec {
        self.queries.interpret_query_at(text, today)
    }

    #[must_use]
    pub const fn utterances(&self) -> &UtteranceInterpreter {
        &self.utterances
    }

    #[must_use]
    pub const fn queries(&self) -> &QueryInterpreter {
        &self.queries
    }
}

/// Interpret a task-creation utterance with the built-in lexicon.
#[must_use]
pub fn interpret(text: &str) -> TaskDraft {
    BUILTIN.interpret(text)
}

/// Interpret a query utterance with the built-in lexicon.
#[must_use]
pub fn interpret_query(text: &str) -> FilterSpec {
    BUILTIN.interpret_query(text)
}
