//! Core operations.
//!
//! This module contains the business logic for quill commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod orders;
pub mod render;

pub use check::check;
pub use orders::orders;
pub use render::{render, write};
