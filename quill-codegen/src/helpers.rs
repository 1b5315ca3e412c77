//! Helper-function registry.
//!
//! Handlers that need a target-language utility (a `length` shim, a
//! random-int wrapper) request it by a desired key. The first request
//! allocates a unique name and emits the body; later requests reuse it.

use indexmap::IndexMap;
use quill_core::Indent;

/// Token standing for the helper's final name inside a body template.
pub const FUNCTION_NAME_PLACEHOLDER: &str = "{{fn}}";

/// A helper that has been provided during the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperRecord {
    /// Key the helper was requested under.
    pub key: String,
    /// Name allocated for it.
    pub name: String,
    /// Final body text, as emitted into the preamble.
    pub body: String,
}

/// Tracks provided helpers in first-request order.
///
/// # Example
///
/// ```
/// use quill_codegen::{HelperRecord, HelperRegistry};
///
/// let mut helpers = HelperRegistry::new();
/// helpers.insert(HelperRecord {
///     key: "length".into(),
///     name: "length".into(),
///     body: "function length($x) {}".into(),
/// });
/// assert_eq!(helpers.name_of("length"), Some("length"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HelperRegistry {
    records: IndexMap<String, HelperRecord>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The allocated name of a previously provided helper.
    pub fn name_of(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(|r| r.name.as_str())
    }

    /// Record a helper. An existing record under the same key is kept.
    pub fn insert(&mut self, record: HelperRecord) {
        self.records.entry(record.key.clone()).or_insert(record);
    }

    /// Iterate over helpers in first-request order.
    pub fn iter(&self) -> impl Iterator<Item = &HelperRecord> {
        self.records.values()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Whether a template mentions the name placeholder at all.
pub fn has_placeholder(template: &[&str]) -> bool {
    template
        .iter()
        .any(|line| line.contains(FUNCTION_NAME_PLACEHOLDER))
}

/// Build the final helper text from its template.
///
/// Every placeholder occurrence becomes `name`, and each leading pair of
/// spaces becomes one `indent` unit.
pub fn render_template(template: &[&str], name: &str, indent: Indent) -> String {
    template
        .iter()
        .map(|line| {
            let line = line.replace(FUNCTION_NAME_PLACEHOLDER, name);
            let body = line.trim_start_matches(' ');
            let levels = (line.len() - body.len()) / 2;
            let rest = &line[levels * 2..];
            format!("{}{}", indent.as_str().repeat(levels), rest)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
