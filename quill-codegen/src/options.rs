//! Generation options.

use quill_core::Indent;

use crate::index::IndexOrigin;

/// Options for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Origin of program-level list and text indices.
    pub index_origin: IndexOrigin,
    /// Column at which comments are wrapped.
    pub comment_wrap: usize,
    /// Indent unit; `None` uses the dialect's default.
    pub indent: Option<Indent>,
}

impl GeneratorOptions {
    pub const DEFAULT_COMMENT_WRAP: usize = 60;

    pub fn with_index_origin(mut self, origin: IndexOrigin) -> Self {
        self.index_origin = origin;
        self
    }

    pub fn with_comment_wrap(mut self, width: usize) -> Self {
        self.comment_wrap = width;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = Some(indent);
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            index_origin: IndexOrigin::One,
            comment_wrap: Self::DEFAULT_COMMENT_WRAP,
            indent: None,
        }
    }
}
