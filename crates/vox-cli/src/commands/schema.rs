use schemars::schema_for;
use serde_json::Value;
use vox_core::responses::{FilterResponse, ParseResponse};
use vox_core::{FilterSpec, Lexicon, TaskRecord};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `vox schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(args.type_name)?, flags.format)
}

/// JSON Schema of the document a command prints.
pub fn schema_value(type_name: SchemaType) -> anyhow::Result<Value> {
    let schema = match type_name {
        SchemaType::Parse => schema_for!(ParseResponse),
        SchemaType::Query => schema_for!(FilterSpec),
        SchemaType::Filter => schema_for!(FilterResponse),
        SchemaType::Task => schema_for!(TaskRecord),
        SchemaType::Lexicon => schema_for!(Lexicon),
    };
    Ok(serde_json::to_value(schema)?)
}
