//! Target-language traits.

use quill_core::Indent;
use quill_ir::Node;

use crate::error::Result;
use crate::precedence::{OrderTable, RenderedExpr};
use crate::session::Session;

/// Description of a target language's surface syntax.
///
/// Implement this trait (together with [`Handlers`]) to add a new target.
pub trait Dialect {
    /// Language identifier (e.g., "php")
    fn name(&self) -> &'static str;

    /// File extension for generated sources (e.g., "php")
    fn file_extension(&self) -> &'static str;

    /// Precedence table and elision whitelist
    fn orders(&self) -> &OrderTable;

    /// Words that must never be used as identifiers
    fn reserved_words(&self) -> &'static [&'static str];

    /// Sigil put in front of variable names (`$` in PHP)
    fn variable_prefix(&self) -> &'static str {
        ""
    }

    /// Line-comment marker including its trailing space
    fn comment_prefix(&self) -> &'static str;

    /// Statement terminator
    fn statement_terminator(&self) -> &'static str;

    /// Indent unit used when no explicit one is configured
    fn default_indent(&self) -> Indent {
        Indent::TWO
    }

    /// Quote a string literal.
    fn quote(&self, text: &str) -> String;

    /// Terminate a value expression used as a statement.
    fn scrub_naked_value(&self, line: &str) -> String {
        format!("{line}{}\n", self.statement_terminator())
    }

    /// Preamble entry declaring the program's variables, if the language
    /// wants one.
    fn declare_variables(&self, _names: &[String]) -> Option<String> {
        None
    }
}

/// What a handler produced for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    /// Statement text, normally newline-terminated.
    Statement(String),
    /// An expression with the rank of its outermost operator.
    Value(RenderedExpr),
    /// The handler stored its output elsewhere (e.g. as a preamble
    /// definition) and nothing is emitted inline.
    Handled,
}

impl Code {
    pub fn value(text: impl Into<String>, rank: crate::Precedence) -> Self {
        Self::Value(RenderedExpr::new(text, rank))
    }

    pub fn statement(text: impl Into<String>) -> Self {
        Self::Statement(text.into())
    }
}

/// Per-construct rendering for a target language.
///
/// Handlers read fields from the node, request children through the
/// session's render entry points and return a [`Code`]. Comments and the
/// node's successor are added by the session, except for output a handler
/// stores away and reports as [`Code::Handled`], which it scrubs itself.
pub trait Handlers {
    fn render(&self, session: &mut Session<'_>, node: &Node) -> Result<Code>;
}
