//! Core utilities and types for the quill code-synthesis engine.
//!
//! This crate provides the text primitives shared by the engine and the
//! target dialects: comment wrapping, line prefixing, numeric literal
//! detection, identifier sanitising and indentation units.

mod indent;
mod utils;

pub use indent::Indent;
pub use utils::{format_number, is_number, parse_number, prefix_lines, safe_identifier, wrap};
