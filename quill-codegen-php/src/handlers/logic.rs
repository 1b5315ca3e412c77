//! Conditionals and boolean expressions.

use quill_codegen::{Code, GenerateError, Result, Session};
use quill_ir::{CompareOp, IfBranch, LogicOp, Node};

use crate::orders::*;

pub(super) fn controls_if(
    s: &mut Session<'_>,
    node: &Node,
    branches: &[IfBranch],
    has_else: bool,
    else_body: Option<&Node>,
) -> Result<Code> {
    if branches.is_empty() {
        return Err(GenerateError::unsupported(node, "no if branch"));
    }
    let mut arms = Vec::with_capacity(branches.len());
    for branch in branches {
        let condition = s.value_or(branch.condition.as_deref(), NONE, "false")?;
        let body = s.statement_to_code(branch.body.as_deref())?;
        arms.push(format!("if ({condition}) {{\n{body}}}"));
    }
    let mut code = arms.join(" else ");
    if has_else {
        let body = s.statement_to_code(else_body)?;
        code.push_str(&format!(" else {{\n{body}}}"));
    }
    code.push('\n');
    Ok(Code::Statement(code))
}

pub(super) fn compare(
    s: &mut Session<'_>,
    op: CompareOp,
    a: Option<&Node>,
    b: Option<&Node>,
) -> Result<Code> {
    let operator = match op {
        CompareOp::Eq => "==",
        CompareOp::Neq => "!=",
        CompareOp::Lt => "<",
        CompareOp::Lte => "<=",
        CompareOp::Gt => ">",
        CompareOp::Gte => ">=",
    };
    let rank = if op.is_equality() { EQUALITY } else { RELATIONAL };
    let a = s.value_or(a, rank, "0")?;
    let b = s.value_or(b, rank, "0")?;
    Ok(Code::value(format!("{a} {operator} {b}"), rank))
}

/// `&&` / `||`. A single missing operand takes the identity of the
/// operator; two missing operands make the whole expression false.
pub(super) fn operation(
    s: &mut Session<'_>,
    op: LogicOp,
    a: Option<&Node>,
    b: Option<&Node>,
) -> Result<Code> {
    let (operator, rank, identity) = match op {
        LogicOp::And => ("&&", LOGICAL_AND, "true"),
        LogicOp::Or => ("||", LOGICAL_OR, "false"),
    };
    let a = s.value_to_code(a, rank)?.map(|e| e.text);
    let b = s.value_to_code(b, rank)?.map(|e| e.text);
    let (a, b) = match (a, b) {
        (None, None) => ("false".to_string(), "false".to_string()),
        (a, b) => (
            a.unwrap_or_else(|| identity.to_string()),
            b.unwrap_or_else(|| identity.to_string()),
        ),
    };
    Ok(Code::value(format!("{a} {operator} {b}"), rank))
}

pub(super) fn negate(s: &mut Session<'_>, value: Option<&Node>) -> Result<Code> {
    let value = s.value_or(value, LOGICAL_NOT, "true")?;
    Ok(Code::value(format!("!{value}"), LOGICAL_NOT))
}

pub(super) fn boolean(value: bool) -> Code {
    Code::value(if value { "true" } else { "false" }, ATOMIC)
}

pub(super) fn null() -> Code {
    Code::value("null", ATOMIC)
}

pub(super) fn ternary(
    s: &mut Session<'_>,
    condition: Option<&Node>,
    then: Option<&Node>,
    otherwise: Option<&Node>,
) -> Result<Code> {
    let condition = s.value_or(condition, CONDITIONAL, "false")?;
    let then = s.value_or(then, CONDITIONAL, "null")?;
    let otherwise = s.value_or(otherwise, CONDITIONAL, "null")?;
    Ok(Code::value(
        format!("{condition} ? {then} : {otherwise}"),
        CONDITIONAL,
    ))
}
