//! Per-pass generation context.
//!
//! A [`Session`] carries everything one generation pass accumulates: the
//! preamble definitions, the helper registry and the bound identifier
//! database. Handlers receive it by `&mut` and use its render entry points
//! to turn children into text. There is no global state; two sessions never
//! share anything but the dialect.

use indexmap::IndexMap;
use quill_core::{Indent, prefix_lines};
use quill_ir::{Node, Program};

use crate::dialect::{Code, Dialect, Handlers};
use crate::error::{GenerateError, Result};
use crate::helpers::{HelperRecord, HelperRegistry, has_placeholder, render_template};
use crate::index::{Adjustment, adjust_index};
use crate::names::{NameCategory, NameDb};
use crate::options::GeneratorOptions;
use crate::precedence::{OrderTable, Precedence, RenderedExpr};

/// Preamble key holding the variable declarations.
pub const VARIABLES_KEY: &str = "variables";

/// State of one generation pass.
pub struct Session<'a> {
    pub(crate) dialect: &'a dyn Dialect,
    handlers: &'a dyn Handlers,
    names: &'a mut dyn NameDb,
    pub(crate) options: GeneratorOptions,
    indent: Indent,
    definitions: IndexMap<String, String>,
    helpers: HelperRegistry,
    declared: Vec<(String, String)>,
}

impl<'a> Session<'a> {
    /// Start a pass. The identifier database is reset and bound to this
    /// session until [`finish`](Self::finish).
    pub fn init(
        dialect: &'a dyn Dialect,
        handlers: &'a dyn Handlers,
        names: &'a mut dyn NameDb,
        options: GeneratorOptions,
    ) -> Self {
        names.reset();
        let indent = options.indent.unwrap_or_else(|| dialect.default_indent());
        tracing::debug!(
            target_lang = dialect.name(),
            origin = ?options.index_origin,
            "session initialised"
        );
        Self {
            dialect,
            handlers,
            names,
            options,
            indent,
            definitions: IndexMap::new(),
            helpers: HelperRegistry::new(),
            declared: Vec::new(),
        }
    }

    /// Bind the program's variables and emit their declarations.
    ///
    /// Only variables some node references are declared.
    pub fn bind_program(&mut self, program: &Program) -> Result<()> {
        self.names.bind_variables(&program.variables);
        self.declared.clear();
        for variable in program.used_variables() {
            let name = self.names.get_name(&variable.id, NameCategory::Variable)?;
            self.declared.push((variable.id.clone(), name));
        }
        let names: Vec<String> = self.declared.iter().map(|(_, n)| n.clone()).collect();
        if let Some(text) = self.dialect.declare_variables(&names) {
            self.define(VARIABLES_KEY, text);
        }
        Ok(())
    }

    /// End the pass: join the preamble definitions with a blank line, then
    /// two blank lines, then `body`.
    ///
    /// Consuming the session releases the identifier database.
    pub fn finish(self, body: &str) -> String {
        tracing::debug!(
            definitions = self.definitions.len(),
            helpers = self.helpers.len(),
            "session finished"
        );
        let preamble = self
            .definitions
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n");
        self.names.reset();
        format!("{preamble}\n\n\n{body}")
    }

    // ------------------------------------------------------------ accessors

    pub fn dialect(&self) -> &'a dyn Dialect {
        self.dialect
    }

    pub fn orders(&self) -> &'a OrderTable {
        self.dialect.orders()
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// One indent unit.
    pub fn indent(&self) -> &'static str {
        self.indent.as_str()
    }

    pub fn helpers(&self) -> &HelperRegistry {
        &self.helpers
    }

    /// `(id, name)` of every variable declared by
    /// [`bind_program`](Self::bind_program), in declaration order.
    pub fn declared_variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declared.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Preamble definitions in insertion order.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.definitions
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn quote(&self, text: &str) -> String {
        self.dialect.quote(text)
    }

    // ---------------------------------------------------------------- names

    pub fn get_name(&mut self, id: &str, category: NameCategory) -> Result<String> {
        self.names.get_name(id, category)
    }

    pub fn get_distinct_name(&mut self, desired: &str, category: NameCategory) -> Result<String> {
        self.names.get_distinct_name(desired, category)
    }

    // ------------------------------------------------------------- preamble

    /// Insert or replace a preamble definition.
    pub fn define(&mut self, key: impl Into<String>, code: impl Into<String>) {
        self.definitions.insert(key.into(), code.into());
    }

    /// Provide a helper function and return its final name.
    ///
    /// The first request for `key` allocates a distinct function name,
    /// substitutes it for [`FUNCTION_NAME_PLACEHOLDER`](crate::FUNCTION_NAME_PLACEHOLDER)
    /// throughout `template` and appends the body to the preamble. Later
    /// requests return the same name and ignore their template.
    pub fn provide_function(&mut self, key: &str, template: &[&str]) -> Result<String> {
        if let Some(name) = self.helpers.name_of(key) {
            return Ok(name.to_string());
        }
        if !has_placeholder(template) {
            return Err(GenerateError::MissingPlaceholder {
                key: key.to_string(),
            });
        }
        let name = self.names.get_distinct_name(key, NameCategory::Function)?;
        let body = render_template(template, &name, self.indent);
        tracing::debug!(key, name = %name, "provided helper");
        self.definitions.insert(key.to_string(), body.clone());
        self.helpers.insert(HelperRecord {
            key: key.to_string(),
            name: name.clone(),
            body,
        });
        Ok(name)
    }

    // ------------------------------------------------------------ rendering

    /// Render a value child for embedding at `outer`.
    ///
    /// Returns `None` for an empty slot or a disabled child; the caller
    /// substitutes its default. The result is parenthesised when the child's
    /// rank requires it. Inline children are never scrubbed; their comments
    /// surface through the consumer's nested-comment collection.
    pub fn value_to_code(
        &mut self,
        node: Option<&Node>,
        outer: Precedence,
    ) -> Result<Option<RenderedExpr>> {
        let Some(node) = node.filter(|n| !n.disabled) else {
            return Ok(None);
        };
        tracing::trace!(kind = node.construct.kind(), id = %node.id, "render value");
        let handlers = self.handlers;
        match handlers.render(self, node)? {
            Code::Value(expr) if expr.text.is_empty() => Ok(None),
            Code::Value(expr) => Ok(Some(self.orders().embed(expr, outer))),
            Code::Statement(_) | Code::Handled => Err(GenerateError::ExpectedValue {
                construct: node.construct.kind(),
                node: node.id.clone(),
            }),
        }
    }

    /// Render a value child, falling back to `default` for an empty slot.
    pub fn value_or(
        &mut self,
        node: Option<&Node>,
        outer: Precedence,
        default: &str,
    ) -> Result<String> {
        Ok(self
            .value_to_code(node, outer)?
            .map_or_else(|| default.to_string(), |expr| expr.text))
    }

    /// Render a statement chain indented by one unit.
    pub fn statement_to_code(&mut self, node: Option<&Node>) -> Result<String> {
        let code = self.statement_chain(node)?;
        if code.is_empty() {
            Ok(code)
        } else {
            Ok(prefix_lines(&code, self.indent()))
        }
    }

    /// Render a standalone node, its comments and (unless `this_only`) its
    /// following siblings.
    ///
    /// Disabled nodes produce nothing; their successor is rendered in their
    /// place. Value results carry their comments but never a successor.
    pub fn block_to_code(&mut self, node: Option<&Node>, this_only: bool) -> Result<Code> {
        let node = match node {
            Some(n) if n.disabled && this_only => None,
            other => other.and_then(|n| n.chain().find(|n| !n.disabled)),
        };
        let Some(node) = node else {
            return Ok(Code::Statement(String::new()));
        };
        tracing::trace!(kind = node.construct.kind(), id = %node.id, "render block");
        let handlers = self.handlers;
        match handlers.render(self, node)? {
            Code::Statement(text) => Ok(Code::Statement(self.scrub(node, &text, this_only)?)),
            Code::Value(expr) => {
                let text = self.scrub(node, &expr.text, true)?;
                Ok(Code::Value(RenderedExpr::new(text, expr.rank)))
            }
            Code::Handled => Ok(Code::Handled),
        }
    }

    /// Render a statement chain without indenting it.
    pub(crate) fn statement_chain(&mut self, node: Option<&Node>) -> Result<String> {
        match self.block_to_code(node, false)? {
            Code::Statement(text) => Ok(text),
            Code::Handled => Ok(String::new()),
            Code::Value(_) => {
                let offender = node
                    .and_then(|n| n.chain().find(|n| !n.disabled))
                    .map(|n| (n.construct.kind(), n.id.clone()))
                    .unwrap_or(("unknown", String::new()));
                Err(GenerateError::ExpectedStatement {
                    construct: offender.0,
                    node: offender.1,
                })
            }
        }
    }

    /// Render an index child shifted by `delta` and optionally negated.
    ///
    /// `delta` is expressed in the program's index origin; the origin shift
    /// to zero-based indexing is applied here. The child is rendered at the
    /// rank of the arithmetic it ends up in.
    pub fn adjusted(
        &mut self,
        node: Option<&Node>,
        delta: i64,
        negate: bool,
        context: Precedence,
    ) -> Result<RenderedExpr> {
        let origin = self.options.index_origin;
        let delta = delta - origin.offset();
        let orders = self.orders();
        let slot = if delta > 0 {
            orders.addition
        } else if delta < 0 {
            orders.subtraction
        } else if negate {
            orders.unary_negation
        } else {
            context
        };
        let base = self.value_to_code(node, slot)?;
        Ok(adjust_index(
            base,
            Adjustment {
                delta,
                negate,
                context,
            },
            origin,
            orders,
        ))
    }

    /// Render a top-level node, terminating a naked value.
    pub fn top_level(&mut self, node: &Node) -> Result<String> {
        match self.block_to_code(Some(node), false)? {
            Code::Statement(text) => Ok(text),
            Code::Handled => Ok(String::new()),
            Code::Value(expr) => {
                let mut text = self.dialect.scrub_naked_value(&expr.text);
                if let Some(rendered) = node.chain().find(|n| !n.disabled) {
                    text.push_str(&self.statement_chain(rendered.next.as_deref())?);
                }
                Ok(text)
            }
        }
    }
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("dialect", &self.dialect.name())
            .field("options", &self.options)
            .field("definitions", &self.definitions.keys().collect::<Vec<_>>())
            .field("helpers", &self.helpers.len())
            .finish()
    }
}
