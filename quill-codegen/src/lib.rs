//! Precedence-driven rendering core for the quill code-synthesis engine.
//!
//! This crate turns a [`quill_ir::Program`] into target-language source
//! text. Target dialects supply the per-construct handlers; this crate owns
//! the parts every handler relies on.
//!
//! # Module Organization
//!
//! - [`precedence`] - Precedence ranks, elision pairs and the paren rule
//! - [`index`] - Adjusted-index arithmetic with constant folding
//! - [`helpers`] - Deduplicating helper-function registry
//! - [`names`] - Collision-free identifier database
//! - [`session`] - Per-pass generation context and render entry points
//! - [`dialect`] - Target language description and handler traits
//! - [`driver`] - Whole-program generation
//! - [`testing`] - Test dialect and utilities (feature-gated)
//!
//! # Example
//!
//! ```ignore
//! use quill_codegen::{GeneratorOptions, NameDatabase, generate};
//! use quill_codegen_php::Php;
//!
//! let mut names = NameDatabase::for_dialect(&Php);
//! let code = generate(&program, &Php, &mut names, GeneratorOptions::default())?;
//! ```

pub mod dialect;
pub mod driver;
mod error;
pub mod helpers;
pub mod index;
pub mod names;
mod options;
pub mod precedence;
mod scrub;
pub mod session;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dialect::{Code, Dialect, Handlers};
pub use driver::{Generated, generate, generate_report};
pub use error::{GenerateError, Result};
pub use helpers::{FUNCTION_NAME_PLACEHOLDER, HelperRecord, HelperRegistry};
pub use index::{Adjustment, IndexOrigin, adjust_index};
pub use names::{NameCategory, NameDatabase, NameDb};
pub use options::GeneratorOptions;
pub use precedence::{ElisionPair, OrderTable, Precedence, RenderedExpr};
pub use scrub::all_nested_comments;
pub use session::Session;
