//! User procedures.

use quill_codegen::{Code, NameCategory, Result, Session};
use quill_ir::Node;

use crate::orders::*;

/// Name and parameter variable ids of a procedure definition.
pub(super) struct Signature<'n> {
    pub name: &'n str,
    pub params: &'n [String],
}

/// Define a procedure. The function text goes to the preamble under
/// `%<name>` so it cannot collide with a helper; nothing is emitted inline.
///
/// Every declared program variable that is not a parameter is pulled in
/// with a `global` statement.
pub(super) fn define(
    s: &mut Session<'_>,
    node: &Node,
    signature: Signature<'_>,
    body: Option<&Node>,
    returns: Option<&Node>,
) -> Result<Code> {
    let globals: Vec<String> = s
        .declared_variables()
        .filter(|(id, _)| !signature.params.iter().any(|p| p == id))
        .map(|(_, name)| name.to_string())
        .collect();
    let indent = s.indent();
    let globals = if globals.is_empty() {
        String::new()
    } else {
        format!("{indent}global {};\n", globals.join(", "))
    };

    let name = s.get_name(signature.name, NameCategory::Function)?;
    let branch = s.statement_to_code(body)?;
    let returns = match s.value_to_code(returns, NONE)? {
        Some(value) => format!("{indent}return {value};\n"),
        None => String::new(),
    };
    let mut args = Vec::with_capacity(signature.params.len());
    for param in signature.params {
        args.push(s.get_name(param, NameCategory::Variable)?);
    }

    let code = format!(
        "function {name}({}) {{\n{globals}{branch}{returns}}}",
        args.join(", ")
    );
    let code = s.scrub(node, &code, false)?;
    tracing::debug!(procedure = %name, "defined procedure");
    s.define(format!("%{name}"), code);
    Ok(Code::Handled)
}

fn call_expression(s: &mut Session<'_>, name: &str, args: &[Option<Node>]) -> Result<String> {
    let name = s.get_name(name, NameCategory::Function)?;
    let mut rendered = Vec::with_capacity(args.len());
    for arg in args {
        rendered.push(s.value_or(arg.as_ref(), COMMA, "null")?);
    }
    Ok(format!("{name}({})", rendered.join(", ")))
}

pub(super) fn call(s: &mut Session<'_>, name: &str, args: &[Option<Node>]) -> Result<Code> {
    Ok(Code::value(call_expression(s, name, args)?, FUNCTION_CALL))
}

pub(super) fn call_statement(
    s: &mut Session<'_>,
    name: &str,
    args: &[Option<Node>],
) -> Result<Code> {
    Ok(Code::statement(format!(
        "{};\n",
        call_expression(s, name, args)?
    )))
}

/// Early return from inside a procedure body.
pub(super) fn if_return(
    s: &mut Session<'_>,
    condition: Option<&Node>,
    has_return: bool,
    value: Option<&Node>,
) -> Result<Code> {
    let condition = s.value_or(condition, NONE, "false")?;
    let indent = s.indent();
    let ret = if has_return {
        let value = s.value_or(value, NONE, "null")?;
        format!("{indent}return {value};\n")
    } else {
        format!("{indent}return;\n")
    };
    Ok(Code::statement(format!("if ({condition}) {{\n{ret}}}\n")))
}
