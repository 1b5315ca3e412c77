//! Tree nodes.

use serde::{Deserialize, Serialize};

use crate::Construct;

/// An optional child slot.
pub type Child = Option<Box<Node>>;

/// A node in the program tree.
///
/// Statement nodes may be followed by a sibling through `next`; this is how
/// a flat statement sequence is represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, used for diagnostics.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Comment attached to this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Disabled nodes produce no code; their successor is rendered instead.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// The construct and its slots.
    #[serde(flatten)]
    pub construct: Construct,
    /// The following sibling statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Child,
}

impl Node {
    /// Create an enabled node without comment or successor.
    pub fn new(construct: Construct) -> Self {
        Self {
            id: String::new(),
            comment: None,
            disabled: false,
            construct,
            next: None,
        }
    }

    /// Set the node identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach a comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the following sibling.
    pub fn with_next(mut self, next: Node) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    /// Mark the node as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Box this node for use in a child slot.
    pub fn boxed(self) -> Child {
        Some(Box::new(self))
    }

    /// The attached comment, if non-empty.
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }

    /// Iterate over this node and its following siblings.
    pub fn chain(&self) -> impl Iterator<Item = &Node> {
        std::iter::successors(Some(self), |n| n.next.as_deref())
    }

    /// This node and every node reachable through value slots, depth first.
    ///
    /// Statement slots and following siblings are not visited.
    pub fn value_descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            let children = node.construct.value_inputs();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Every node reachable from this one, including statement slots and
    /// following siblings.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(next) = node.next.as_deref() {
                stack.push(next);
            }
            stack.extend(node.construct.statement_inputs().into_iter().rev());
            stack.extend(node.construct.value_inputs().into_iter().rev());
        }
        out
    }
}
