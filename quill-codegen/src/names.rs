//! Collision-free identifier allocation.
//!
//! Generated code must never reuse a name for two different things, and must
//! never emit a target-language keyword as an identifier. The [`NameDb`]
//! trait is the contract the session relies on; [`NameDatabase`] is the
//! default implementation driven by a dialect's reserved words.

use std::collections::{HashMap, HashSet};

use quill_core::safe_identifier;
use quill_ir::Variable;

use crate::dialect::Dialect;
use crate::error::{GenerateError, Result};

/// What an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameCategory {
    /// A user variable, looked up by variable id.
    Variable,
    /// A temporary introduced by a handler.
    DeveloperVariable,
    /// A helper function or user procedure.
    Function,
}

impl NameCategory {
    fn takes_variable_prefix(self) -> bool {
        matches!(self, Self::Variable | Self::DeveloperVariable)
    }
}

/// Identifier database contract used by a generation session.
pub trait NameDb {
    /// Forget every allocated name. Called once per session by `init`.
    fn reset(&mut self);

    /// Bind the program's variable table so variable ids resolve to their
    /// display names.
    fn bind_variables(&mut self, variables: &[Variable]);

    /// Stable name for a logical id; the same id and category always yield
    /// the same text within a session.
    fn get_name(&mut self, id: &str, category: NameCategory) -> Result<String>;

    /// A fresh name derived from `desired` that collides with nothing
    /// allocated so far.
    fn get_distinct_name(&mut self, desired: &str, category: NameCategory) -> Result<String>;
}

/// Default [`NameDb`]: sanitises names, avoids reserved words and resolves
/// collisions with numeric suffixes.
#[derive(Debug, Clone)]
pub struct NameDatabase {
    reserved: HashSet<String>,
    variable_prefix: String,
    max_suffix: u32,
    variables: HashMap<String, String>,
    assigned: HashMap<(String, NameCategory), String>,
    taken: HashSet<String>,
}

impl NameDatabase {
    /// Default upper bound on collision suffixes.
    pub const DEFAULT_MAX_SUFFIX: u32 = 10_000;

    pub fn new<'a>(reserved: impl IntoIterator<Item = &'a str>, variable_prefix: &str) -> Self {
        Self {
            reserved: reserved.into_iter().map(str::to_string).collect(),
            variable_prefix: variable_prefix.to_string(),
            max_suffix: Self::DEFAULT_MAX_SUFFIX,
            variables: HashMap::new(),
            assigned: HashMap::new(),
            taken: HashSet::new(),
        }
    }

    /// Create a database configured from a dialect.
    pub fn for_dialect(dialect: &dyn Dialect) -> Self {
        Self::new(
            dialect.reserved_words().iter().copied(),
            dialect.variable_prefix(),
        )
    }

    /// Limit how many numeric suffixes are tried before giving up.
    pub fn with_max_suffix(mut self, max_suffix: u32) -> Self {
        self.max_suffix = max_suffix;
        self
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    fn decorate(&self, name: &str, category: NameCategory) -> String {
        if category.takes_variable_prefix() {
            format!("{}{}", self.variable_prefix, name)
        } else {
            name.to_string()
        }
    }

    /// Allocate an undecorated name.
    fn allocate(&mut self, desired: &str) -> Result<String> {
        let safe = safe_identifier(desired);
        let mut candidate = safe.clone();
        let mut suffix = 1;
        while self.taken.contains(&candidate) || self.is_reserved(&candidate) {
            suffix += 1;
            if suffix > self.max_suffix {
                return Err(GenerateError::NamesExhausted {
                    name: desired.to_string(),
                });
            }
            candidate = format!("{safe}{suffix}");
        }
        self.taken.insert(candidate.clone());
        Ok(candidate)
    }
}

impl NameDb for NameDatabase {
    fn reset(&mut self) {
        self.assigned.clear();
        self.taken.clear();
        self.variables.clear();
    }

    fn bind_variables(&mut self, variables: &[Variable]) {
        self.variables = variables
            .iter()
            .map(|v| (v.id.clone(), v.name.clone()))
            .collect();
    }

    fn get_name(&mut self, id: &str, category: NameCategory) -> Result<String> {
        let key = (id.to_lowercase(), category);
        if let Some(name) = self.assigned.get(&key) {
            return Ok(self.decorate(name, category));
        }
        let display = match category {
            NameCategory::Variable => self
                .variables
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.to_string()),
            _ => id.to_string(),
        };
        let name = self.allocate(&display)?;
        tracing::trace!(id, name = %name, ?category, "assigned identifier");
        let decorated = self.decorate(&name, category);
        self.assigned.insert(key, name);
        Ok(decorated)
    }

    fn get_distinct_name(&mut self, desired: &str, category: NameCategory) -> Result<String> {
        let name = self.allocate(desired)?;
        Ok(self.decorate(&name, category))
    }
}
