//! Configuration and program loading for quill.
//!
//! - [`Manifest`] is the parsed `quill.toml`; `GeneratorOptions::from(&manifest)`
//!   turns it into the options of a generation pass.
//! - [`load_program`] reads a program JSON file.
//!
//! Both report failures as [`Error`], a miette diagnostic that carries the
//! source text and, where known, the offending span.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod program;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, MAX_INDENT, MIN_COMMENT_WRAP, Manifest, Target, parse_manifest,
};
pub use program::{load_program, parse_program, undeclared_references};
