//! PHP target for the quill code-synthesis engine.
//!
//! [`Php`] implements both [`quill_codegen::Dialect`] (surface syntax,
//! precedence table, reserved words) and [`quill_codegen::Handlers`] (one
//! rendering rule per construct).
//!
//! ```ignore
//! use quill_codegen::{GeneratorOptions, NameDatabase, generate};
//! use quill_codegen_php::Php;
//!
//! let mut names = NameDatabase::for_dialect(&Php);
//! let code = generate(&program, &Php, &mut names, GeneratorOptions::default())?;
//! ```

mod dialect;
mod handlers;
pub mod orders;

pub use dialect::{Php, RESERVED_WORDS};
