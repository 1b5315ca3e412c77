//! Variable access.

use quill_codegen::{Code, NameCategory, Result, Session};
use quill_ir::Node;

use crate::orders::*;

pub(super) fn get(s: &mut Session<'_>, variable: &str) -> Result<Code> {
    let name = s.get_name(variable, NameCategory::Variable)?;
    Ok(Code::value(name, ATOMIC))
}

pub(super) fn set(s: &mut Session<'_>, variable: &str, value: Option<&Node>) -> Result<Code> {
    let value = s.value_or(value, ASSIGNMENT, "0")?;
    let name = s.get_name(variable, NameCategory::Variable)?;
    Ok(Code::statement(format!("{name} = {value};\n")))
}
