//! Whole programs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Node;

/// A user variable declared by the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Identifier referenced by `variable` fields.
    pub id: String,
    /// Display name, used as the seed for the generated identifier.
    pub name: String,
}

impl Variable {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A complete program: declared variables plus top-level node chains.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub blocks: Vec<Node>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable.
    pub fn variable(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.variables.push(Variable::new(id, name));
        self
    }

    /// Append a top-level node chain.
    pub fn block(mut self, node: Node) -> Self {
        self.blocks.push(node);
        self
    }

    /// Look up a variable by id.
    pub fn find_variable(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    /// Declared variables that some node references, in declaration order.
    pub fn used_variables(&self) -> Vec<&Variable> {
        let used: HashSet<&str> = self
            .blocks
            .iter()
            .flat_map(Node::descendants)
            .filter_map(|n| n.construct.variable_ref())
            .collect();
        self.variables
            .iter()
            .filter(|v| used.contains(v.id.as_str()))
            .collect()
    }
}
