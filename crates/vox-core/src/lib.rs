//! # vox-core
//!
//! Core types, lexicon tables, and error types for voxtask.
//!
//! This crate provides the foundational types shared across all voxtask crates:
//! - Label enums for priorities and categories
//! - Lexicon data (trigger phrases and numeric offsets) with the built-in tables
//! - The task draft produced from a creation utterance
//! - The filter spec produced from a query utterance, and its task matcher
//! - The task record handed to storage collaborators
//! - Cross-cutting error types
//! - CLI response types

pub mod draft;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod lexicon;
pub mod responses;
pub mod task;

pub use draft::{PLACEHOLDER_NAME, TaskDraft};
pub use enums::{Category, MissingField, Priority, RecognizedField};
pub use errors::CoreError;
pub use filter::{FilterSpec, TaskFilter};
pub use lexicon::Lexicon;
pub use task::TaskRecord;
