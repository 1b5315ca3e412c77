//! Comment collection and sibling chaining for standalone nodes.

use quill_core::{prefix_lines, wrap};
use quill_ir::Node;

use crate::error::Result;
use crate::session::Session;

/// Width taken by the comment marker when wrapping.
const COMMENT_MARKER_WIDTH: usize = 3;

/// Comments attached to `node` and everything feeding its value slots,
/// newline-joined with a trailing newline. Empty when there are none.
pub fn all_nested_comments(node: &Node) -> String {
    let comments: Vec<&str> = node
        .value_descendants()
        .into_iter()
        .filter_map(Node::comment_text)
        .collect();
    if comments.is_empty() {
        String::new()
    } else {
        let mut out = comments.join("\n");
        out.push('\n');
        out
    }
}

impl Session<'_> {
    /// Decorate a standalone node's code with its comments and, unless
    /// `this_only`, append the rendered sibling chain.
    ///
    /// Output is `<own comment><nested value comments><code><siblings>`
    /// with no separator injected between the parts.
    pub fn scrub(&mut self, node: &Node, code: &str, this_only: bool) -> Result<String> {
        let prefix = self.dialect.comment_prefix();
        let mut comments = String::new();
        if let Some(comment) = node.comment_text() {
            let width = self
                .options
                .comment_wrap
                .saturating_sub(COMMENT_MARKER_WIDTH);
            comments.push_str(&prefix_lines(&wrap(comment, width), prefix));
            comments.push('\n');
        }
        for child in node.construct.value_inputs() {
            let nested = all_nested_comments(child);
            if !nested.is_empty() {
                comments.push_str(&prefix_lines(&nested, prefix));
            }
        }

        let siblings = if this_only {
            String::new()
        } else {
            self.statement_chain(node.next.as_deref())?
        };
        Ok(format!("{comments}{code}{siblings}"))
    }
}
