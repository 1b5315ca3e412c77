//! Fatal generation errors.

use thiserror::Error;

/// Result type for generation passes.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// An error that aborts a generation pass.
///
/// There is no partial output: a pass either produces complete source text
/// or fails with one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A handler met a mode or field combination it cannot translate.
    #[error("unsupported {construct} (node '{node}'): {detail}")]
    Unsupported {
        construct: &'static str,
        node: String,
        detail: String,
    },

    /// A statement-only construct was plugged into a value slot.
    #[error("{construct} (node '{node}') produces a statement where a value is required")]
    ExpectedValue { construct: &'static str, node: String },

    /// A value construct was placed in a statement slot.
    #[error("{construct} (node '{node}') produces a value where a statement is required")]
    ExpectedStatement { construct: &'static str, node: String },

    /// The identifier database could not produce a unique name.
    #[error("identifier database exhausted while naming '{name}'")]
    NamesExhausted { name: String },

    /// A helper template never mentions its own name.
    #[error("helper '{key}' has no function-name placeholder in its template")]
    MissingPlaceholder { key: String },
}

impl GenerateError {
    /// Create an unsupported-variant error for a node.
    pub fn unsupported(node: &quill_ir::Node, detail: impl Into<String>) -> Self {
        Self::Unsupported {
            construct: node.construct.kind(),
            node: node.id.clone(),
            detail: detail.into(),
        }
    }
}
