//! String literals and string operations.

use quill_codegen::{Code, IndexOrigin, NameCategory, RenderedExpr, Result, Session};
use quill_ir::{Node, Position, SearchEnd};

use super::{EMPTY_TEXT, Range};
use crate::Php;
use crate::orders::*;

/// Shared with `lists_length`: PHP has separate length functions for
/// strings and arrays.
pub(super) const LENGTH_HELPER: &[&str] = &[
    "function {{fn}}($value) {",
    "  if (is_string($value)) {",
    "    return strlen($value);",
    "  } else {",
    "    return count($value);",
    "  }",
    "}",
];

pub(super) fn literal(s: &Session<'_>, text: &str) -> Code {
    Code::value(s.quote(text), ATOMIC)
}

pub(super) fn multiline(php: &Php, text: &str) -> Code {
    Code::value(php.multiline_quote(text), ATOMIC)
}

/// Concatenate any number of items. Two items use the `.` operator, more
/// go through `implode`.
pub(super) fn join(s: &mut Session<'_>, items: &[Option<Node>]) -> Result<Code> {
    match items {
        [] => Ok(Code::value(EMPTY_TEXT, ATOMIC)),
        [item] => Ok(match s.value_to_code(item.as_ref(), NONE)? {
            Some(expr) => Code::Value(expr),
            None => Code::value(EMPTY_TEXT, ATOMIC),
        }),
        [a, b] => {
            let a = s.value_or(a.as_ref(), ATOMIC, EMPTY_TEXT)?;
            let b = s.value_or(b.as_ref(), ATOMIC, EMPTY_TEXT)?;
            Ok(Code::value(format!("{a} . {b}"), STRING_CONCAT))
        }
        items => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(s.value_or(item.as_ref(), COMMA, EMPTY_TEXT)?);
            }
            Ok(Code::value(
                format!("implode('', array({}))", parts.join(",")),
                FUNCTION_CALL,
            ))
        }
    }
}

pub(super) fn append(s: &mut Session<'_>, variable: &str, text: Option<&Node>) -> Result<Code> {
    let name = s.get_name(variable, NameCategory::Variable)?;
    let value = s.value_or(text, ASSIGNMENT, EMPTY_TEXT)?;
    Ok(Code::statement(format!("{name} .= {value};\n")))
}

pub(super) fn length(s: &mut Session<'_>, value: Option<&Node>) -> Result<Code> {
    let name = s.provide_function("length", LENGTH_HELPER)?;
    let value = s.value_or(value, NONE, EMPTY_TEXT)?;
    Ok(Code::value(format!("{name}({value})"), FUNCTION_CALL))
}

pub(super) fn is_empty(s: &mut Session<'_>, value: Option<&Node>) -> Result<Code> {
    let value = s.value_or(value, NONE, EMPTY_TEXT)?;
    Ok(Code::value(format!("empty({value})"), FUNCTION_CALL))
}

/// Position of a substring in the program's index origin, or the
/// origin's "not found" value.
pub(super) fn index_of(
    s: &mut Session<'_>,
    end: SearchEnd,
    value: Option<&Node>,
    find: Option<&Node>,
) -> Result<Code> {
    let (function, key) = match end {
        SearchEnd::First => ("strpos", "text_indexOf"),
        SearchEnd::Last => ("strrpos", "text_lastIndexOf"),
    };
    let find = s.value_or(find, NONE, EMPTY_TEXT)?;
    let value = s.value_or(value, NONE, EMPTY_TEXT)?;
    let (missing, found) = match s.options().index_origin {
        IndexOrigin::One => ("0", "$pos + 1"),
        IndexOrigin::Zero => ("-1", "$pos"),
    };
    let search = format!("  $pos = {function}($text, $search);");
    let result = format!("  return $pos === false ? {missing} : {found};");
    let name = s.provide_function(
        key,
        &[
            "function {{fn}}($text, $search) {",
            search.as_str(),
            result.as_str(),
            "}",
        ],
    )?;
    Ok(Code::value(format!("{name}({value}, {find})"), FUNCTION_CALL))
}

pub(super) fn char_at(
    s: &mut Session<'_>,
    position: Position,
    value: Option<&Node>,
    at: Option<&Node>,
) -> Result<Code> {
    let rank = if position == Position::Random { NONE } else { COMMA };
    let text = s.value_or(value, rank, EMPTY_TEXT)?;
    let code = match position {
        Position::First => format!("substr({text}, 0, 1)"),
        Position::Last => format!("substr({text}, -1)"),
        Position::FromStart => {
            let at = s.adjusted(at, 0, false, NONE)?;
            format!("substr({text}, {at}, 1)")
        }
        Position::FromEnd => {
            let at = s.adjusted(at, 1, true, NONE)?;
            format!("substr({text}, {at}, 1)")
        }
        Position::Random => {
            let name = s.provide_function(
                "text_random_letter",
                &[
                    "function {{fn}}($text) {",
                    "  return $text[rand(0, strlen($text) - 1)];",
                    "}",
                ],
            )?;
            format!("{name}({text})")
        }
    };
    Ok(Code::value(code, FUNCTION_CALL))
}

const SUBSTRING_HELPER: &[&str] = &[
    "function {{fn}}($text, $where1, $at1, $where2, $at2) {",
    "  if ($where1 == 'FROM_END') {",
    "    $at1 = strlen($text) - 1 - $at1;",
    "  } else if ($where1 == 'FIRST') {",
    "    $at1 = 0;",
    "  } else if ($where1 != 'FROM_START') {",
    "    throw new Exception('Unhandled option (text_get_substring).');",
    "  }",
    "  $length = 0;",
    "  if ($where2 == 'FROM_START') {",
    "    $length = $at2 - $at1 + 1;",
    "  } else if ($where2 == 'FROM_END') {",
    "    $length = strlen($text) - $at1 - $at2;",
    "  } else if ($where2 == 'LAST') {",
    "    $length = strlen($text) - $at1;",
    "  } else {",
    "    throw new Exception('Unhandled option (text_get_substring).');",
    "  }",
    "  return substr($text, $at1, $length);",
    "}",
];

pub(super) fn get_substring(
    s: &mut Session<'_>,
    value: Option<&Node>,
    range: Range<'_>,
) -> Result<Code> {
    let text = s
        .value_to_code(value, FUNCTION_CALL)?
        .unwrap_or_else(|| RenderedExpr::new(EMPTY_TEXT, ATOMIC));
    if range.is_whole() {
        return Ok(Code::Value(text));
    }
    let at1 = s.adjusted(range.at1, 0, false, NONE)?;
    let at2 = s.adjusted(range.at2, 0, false, NONE)?;
    let name = s.provide_function("text_get_substring", SUBSTRING_HELPER)?;
    Ok(Code::value(
        format!(
            "{name}({text}, '{}', {at1}, '{}', {at2})",
            range.start.as_str(),
            range.end.as_str()
        ),
        FUNCTION_CALL,
    ))
}

pub(super) fn print(s: &mut Session<'_>, value: Option<&Node>) -> Result<Code> {
    let value = s.value_or(value, NONE, EMPTY_TEXT)?;
    Ok(Code::statement(format!("print({value});\n")))
}
