//! Loops and loop control.

use quill_codegen::{Code, NameCategory, Result, Session};
use quill_core::{format_number, parse_number};
use quill_ir::{Flow, LoopMode, Node};

use super::is_simple;
use crate::orders::*;

/// Value slots of a counting loop.
pub(super) struct Bounds<'n> {
    pub from: Option<&'n Node>,
    pub to: Option<&'n Node>,
    pub by: Option<&'n Node>,
}

/// Store `value` in a fresh temporary unless it is simple enough to repeat.
fn cache(s: &mut Session<'_>, code: &mut String, value: String, seed: &str) -> Result<String> {
    if is_simple(&value) {
        return Ok(value);
    }
    let var = s.get_distinct_name(seed, NameCategory::Variable)?;
    code.push_str(&format!("{var} = {value};\n"));
    Ok(var)
}

pub(super) fn repeat(
    s: &mut Session<'_>,
    times: Option<&Node>,
    body: Option<&Node>,
) -> Result<Code> {
    let times = s.value_or(times, ASSIGNMENT, "0")?;
    let branch = s.statement_to_code(body)?;
    let counter = s.get_distinct_name("count", NameCategory::Variable)?;
    let mut code = String::new();
    let end = cache(s, &mut code, times, "repeat_end")?;
    code.push_str(&format!(
        "for ({counter} = 0; {counter} < {end}; {counter}++) {{\n{branch}}}\n"
    ));
    Ok(Code::Statement(code))
}

pub(super) fn while_until(
    s: &mut Session<'_>,
    mode: LoopMode,
    condition: Option<&Node>,
    body: Option<&Node>,
) -> Result<Code> {
    let until = mode == LoopMode::Until;
    let rank = if until { LOGICAL_NOT } else { NONE };
    let mut condition = s.value_or(condition, rank, "false")?;
    let branch = s.statement_to_code(body)?;
    if until {
        condition.insert(0, '!');
    }
    Ok(Code::Statement(format!(
        "while ({condition}) {{\n{branch}}}\n"
    )))
}

/// `controls_for`: count from `from` to `to` inclusive in steps of `by`.
///
/// Literal bounds produce a plain `for` with the direction fixed at
/// generation time. Otherwise the direction is decided at run time from
/// cached bounds.
pub(super) fn count_with(
    s: &mut Session<'_>,
    variable: &str,
    bounds: Bounds<'_>,
    body: Option<&Node>,
) -> Result<Code> {
    let var = s.get_name(variable, NameCategory::Variable)?;
    let from = s.value_or(bounds.from, ASSIGNMENT, "0")?;
    let to = s.value_or(bounds.to, ASSIGNMENT, "0")?;
    let by = s.value_or(bounds.by, ASSIGNMENT, "1")?;
    let branch = s.statement_to_code(body)?;

    if let (Some(start), Some(end), Some(step)) =
        (parse_number(&from), parse_number(&to), parse_number(&by))
    {
        let up = start <= end;
        let step = step.abs();
        let advance = match (step == 1.0, up) {
            (true, true) => "++".to_string(),
            (true, false) => "--".to_string(),
            (false, true) => format!(" += {}", format_number(step)),
            (false, false) => format!(" -= {}", format_number(step)),
        };
        let compare = if up { "<=" } else { ">=" };
        return Ok(Code::Statement(format!(
            "for ({var} = {from}; {var} {compare} {to}; {var}{advance}) {{\n{branch}}}\n"
        )));
    }

    let stem = var.trim_start_matches('$');
    let mut code = String::new();
    let start = cache(s, &mut code, from, &format!("{stem}_start"))?;
    let end = cache(s, &mut code, to, &format!("{stem}_end"))?;
    let inc = s.get_distinct_name(&format!("{stem}_inc"), NameCategory::Variable)?;
    match parse_number(&by) {
        Some(step) => code.push_str(&format!("{inc} = {};\n", format_number(step.abs()))),
        None => code.push_str(&format!("{inc} = abs({by});\n")),
    }
    let indent = s.indent();
    code.push_str(&format!(
        "if ({start} > {end}) {{\n{indent}{inc} = -{inc};\n}}\n"
    ));
    code.push_str(&format!(
        "for ({var} = {start}; {inc} >= 0 ? {var} <= {end} : {var} >= {end}; {var} += {inc}) {{\n{branch}}}\n"
    ));
    Ok(Code::Statement(code))
}

pub(super) fn for_each(
    s: &mut Session<'_>,
    variable: &str,
    list: Option<&Node>,
    body: Option<&Node>,
) -> Result<Code> {
    let var = s.get_name(variable, NameCategory::Variable)?;
    let list = s.value_or(list, ASSIGNMENT, "[]")?;
    let branch = s.statement_to_code(body)?;
    Ok(Code::Statement(format!(
        "foreach ({list} as {var}) {{\n{branch}}}\n"
    )))
}

pub(super) fn flow(flow: Flow) -> Code {
    match flow {
        Flow::Break => Code::statement("break;\n"),
        Flow::Continue => Code::statement("continue;\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_statements() {
        assert_eq!(flow(Flow::Break), Code::statement("break;\n"));
        assert_eq!(flow(Flow::Continue), Code::statement("continue;\n"));
    }
}
