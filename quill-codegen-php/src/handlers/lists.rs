//! Arrays.

use quill_codegen::{Code, NameCategory, RenderedExpr, Result, Session};
use quill_core::is_number;
use quill_ir::{ListMode, Node, Position, SetMode};

use super::text::LENGTH_HELPER;
use super::{EMPTY_LIST, EMPTY_TEXT, Range, is_variable};
use crate::orders::*;

pub(super) fn create_empty() -> Code {
    Code::value(EMPTY_LIST, FUNCTION_CALL)
}

pub(super) fn create_with(s: &mut Session<'_>, items: &[Option<Node>]) -> Result<Code> {
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        parts.push(s.value_or(item.as_ref(), COMMA, "null")?);
    }
    Ok(Code::value(
        format!("array({})", parts.join(", ")),
        FUNCTION_CALL,
    ))
}

pub(super) fn repeat(
    s: &mut Session<'_>,
    item: Option<&Node>,
    count: Option<&Node>,
) -> Result<Code> {
    let name = s.provide_function(
        "lists_repeat",
        &[
            "function {{fn}}($value, $count) {",
            "  $array = array();",
            "  for ($index = 0; $index < $count; $index++) {",
            "    $array[] = $value;",
            "  }",
            "  return $array;",
            "}",
        ],
    )?;
    let item = s.value_or(item, COMMA, "null")?;
    let count = s.value_or(count, COMMA, "0")?;
    Ok(Code::value(format!("{name}({item}, {count})"), FUNCTION_CALL))
}

pub(super) fn length(s: &mut Session<'_>, value: Option<&Node>) -> Result<Code> {
    let name = s.provide_function("length", LENGTH_HELPER)?;
    let list = s.value_or(value, NONE, EMPTY_TEXT)?;
    Ok(Code::value(format!("{name}({list})"), FUNCTION_CALL))
}

pub(super) fn is_empty(s: &mut Session<'_>, value: Option<&Node>) -> Result<Code> {
    let list = s.value_or(value, FUNCTION_CALL, EMPTY_LIST)?;
    Ok(Code::value(format!("empty({list})"), FUNCTION_CALL))
}

/// Read and/or remove one element.
///
/// `Remove` yields a statement; every other mode yields a value.
pub(super) fn get_index(
    s: &mut Session<'_>,
    mode: ListMode,
    position: Position,
    list: Option<&Node>,
    at: Option<&Node>,
) -> Result<Code> {
    let call = match (position, mode) {
        (Position::First, ListMode::Get) => {
            let list = s.value_or(list, MEMBER, EMPTY_LIST)?;
            return Ok(Code::value(format!("{list}[0]"), MEMBER));
        }
        (Position::First, _) => {
            let list = s.value_or(list, NONE, EMPTY_LIST)?;
            format!("array_shift({list})")
        }
        (Position::Last, ListMode::Get) => {
            let list = s.value_or(list, NONE, EMPTY_LIST)?;
            format!("end({list})")
        }
        (Position::Last, _) => {
            let list = s.value_or(list, NONE, EMPTY_LIST)?;
            format!("array_pop({list})")
        }
        (Position::FromStart, ListMode::Get) => {
            let at = s.adjusted(at, 0, false, NONE)?;
            let list = s.value_or(list, MEMBER, EMPTY_LIST)?;
            return Ok(Code::value(format!("{list}[{at}]"), MEMBER));
        }
        (Position::FromStart, ListMode::GetRemove) => {
            let at = s.adjusted(at, 0, false, NONE)?;
            let list = s.value_or(list, COMMA, EMPTY_LIST)?;
            format!("array_splice({list}, {at}, 1)[0]")
        }
        (Position::FromStart, ListMode::Remove) => {
            let at = s.adjusted(at, 0, false, NONE)?;
            let list = s.value_or(list, COMMA, EMPTY_LIST)?;
            format!("array_splice({list}, {at}, 1)")
        }
        (Position::FromEnd, ListMode::Get) => {
            let list = s.value_or(list, COMMA, EMPTY_LIST)?;
            let at = s.adjusted(at, 1, true, NONE)?;
            format!("array_slice({list}, {at}, 1)[0]")
        }
        (Position::FromEnd, _) => {
            let list = s.value_or(list, NONE, EMPTY_LIST)?;
            let at = s.adjusted(at, 1, false, SUBTRACTION)?;
            format!("array_splice({list}, count({list}) - {at}, 1)[0]")
        }
        (Position::Random, mode) => {
            let list = s.value_or(list, NONE, EMPTY_LIST)?;
            let name = match mode {
                ListMode::Get => s.provide_function(
                    "lists_get_random_item",
                    &[
                        "function {{fn}}($list) {",
                        "  return $list[rand(0,count($list)-1)];",
                        "}",
                    ],
                )?,
                ListMode::GetRemove => s.provide_function(
                    "lists_get_remove_random_item",
                    &[
                        "function {{fn}}(&$list) {",
                        "  $x = rand(0,count($list)-1);",
                        "  unset($list[$x]);",
                        "  return array_values($list);",
                        "}",
                    ],
                )?,
                ListMode::Remove => s.provide_function(
                    "lists_remove_random_item",
                    &[
                        "function {{fn}}(&$list) {",
                        "  unset($list[rand(0,count($list)-1)]);",
                        "}",
                    ],
                )?,
            };
            format!("{name}({list})")
        }
    };

    if mode.yields_value() {
        Ok(Code::value(call, FUNCTION_CALL))
    } else {
        Ok(Code::statement(format!("{call};\n")))
    }
}

/// Overwrite or insert one element.
pub(super) fn set_index(
    s: &mut Session<'_>,
    mode: SetMode,
    position: Position,
    list: Option<&Node>,
    at: Option<&Node>,
    to: Option<&Node>,
) -> Result<Code> {
    let value = s.value_or(to, ASSIGNMENT, "null")?;
    let code = match (position, mode) {
        (Position::First, SetMode::Set) => {
            let list = s.value_or(list, MEMBER, EMPTY_LIST)?;
            format!("{list}[0] = {value};\n")
        }
        (Position::First, SetMode::Insert) => {
            let list = s.value_or(list, COMMA, EMPTY_LIST)?;
            format!("array_unshift({list}, {value});\n")
        }
        (Position::Last, SetMode::Set) => {
            let list = s.value_or(list, COMMA, EMPTY_LIST)?;
            let name = s.provide_function(
                "lists_set_last_item",
                &[
                    "function {{fn}}(&$list, $value) {",
                    "  $list[count($list) - 1] = $value;",
                    "}",
                ],
            )?;
            format!("{name}({list}, {value});\n")
        }
        (Position::Last, SetMode::Insert) => {
            let list = s.value_or(list, COMMA, EMPTY_LIST)?;
            format!("array_push({list}, {value});\n")
        }
        (Position::FromStart, SetMode::Set) => {
            let at = s.adjusted(at, 0, false, NONE)?;
            let list = s.value_or(list, MEMBER, EMPTY_LIST)?;
            format!("{list}[{at}] = {value};\n")
        }
        (Position::FromStart, SetMode::Insert) => {
            let at = s.adjusted(at, 0, false, NONE)?;
            let list = s.value_or(list, COMMA, EMPTY_LIST)?;
            format!("array_splice({list}, {at}, 0, {value});\n")
        }
        (Position::FromEnd, mode) => {
            let list = s.value_or(list, COMMA, EMPTY_LIST)?;
            let at = s.adjusted(at, 1, false, NONE)?;
            let name = match mode {
                SetMode::Set => s.provide_function(
                    "lists_set_from_end",
                    &[
                        "function {{fn}}(&$list, $at, $value) {",
                        "  $list[count($list) - $at] = $value;",
                        "}",
                    ],
                )?,
                SetMode::Insert => s.provide_function(
                    "lists_insert_from_end",
                    &[
                        "function {{fn}}(&$list, $at, $value) {",
                        "  return array_splice($list, count($list) - $at, 0, $value);",
                        "}",
                    ],
                )?,
            };
            format!("{name}({list}, {at}, {value});\n")
        }
        (Position::Random, mode) => {
            let list = s.value_or(list, REFERENCE, EMPTY_LIST)?;
            let mut code = String::new();
            // An expression list is bound by reference so the write lands in it.
            let list = if is_variable(&list) {
                list
            } else {
                let var = s.get_distinct_name("tmp_list", NameCategory::Variable)?;
                code.push_str(&format!("{var} = &{list};\n"));
                var
            };
            let x = s.get_distinct_name("tmp_x", NameCategory::Variable)?;
            code.push_str(&format!("{x} = rand(0, count({list})-1);\n"));
            match mode {
                SetMode::Set => code.push_str(&format!("{list}[{x}] = {value};\n")),
                SetMode::Insert => {
                    code.push_str(&format!("array_splice({list}, {x}, 0, {value});\n"))
                }
            }
            code
        }
    };
    Ok(Code::statement(code))
}

const SUBLIST_HELPER: &[&str] = &[
    "function {{fn}}($list, $where1, $at1, $where2, $at2) {",
    "  if ($where1 == 'FROM_END') {",
    "    $at1 = count($list) - 1 - $at1;",
    "  } else if ($where1 == 'FIRST') {",
    "    $at1 = 0;",
    "  } else if ($where1 != 'FROM_START') {",
    "    throw new Exception('Unhandled option (lists_get_sublist).');",
    "  }",
    "  $length = 0;",
    "  if ($where2 == 'FROM_START') {",
    "    $length = $at2 - $at1 + 1;",
    "  } else if ($where2 == 'FROM_END') {",
    "    $length = count($list) - $at1 - $at2;",
    "  } else if ($where2 == 'LAST') {",
    "    $length = count($list) - $at1;",
    "  } else {",
    "    throw new Exception('Unhandled option (lists_get_sublist).');",
    "  }",
    "  return array_slice($list, $at1, $length);",
    "}",
];

/// Copy a contiguous run of elements.
///
/// A plain variable, or a range whose length needs no `count` call, is
/// sliced inline; anything else goes through a helper so the list
/// expression is evaluated once.
pub(super) fn get_sublist(
    s: &mut Session<'_>,
    list: Option<&Node>,
    range: Range<'_>,
) -> Result<Code> {
    let list = s
        .value_to_code(list, COMMA)?
        .unwrap_or_else(|| RenderedExpr::new(EMPTY_LIST, FUNCTION_CALL));
    if range.is_whole() {
        return Ok(Code::Value(list));
    }
    let list = list.text;

    let inline = is_variable(&list)
        || (range.start != Position::FromEnd && range.end == Position::FromStart);
    if !inline {
        let at1 = s.adjusted(range.at1, 0, false, NONE)?;
        let at2 = s.adjusted(range.at2, 0, false, NONE)?;
        let name = s.provide_function("lists_get_sublist", SUBLIST_HELPER)?;
        return Ok(Code::value(
            format!(
                "{name}({list}, '{}', {at1}, '{}', {at2})",
                range.start.as_str(),
                range.end.as_str()
            ),
            FUNCTION_CALL,
        ));
    }

    let at1 = match range.start {
        Position::FromEnd => {
            let at = s.adjusted(range.at1, 1, false, SUBTRACTION)?;
            format!("count({list}) - {at}")
        }
        Position::First => "0".to_string(),
        _ => s.adjusted(range.at1, 0, false, NONE)?.text,
    };
    let start = grouped(&at1);
    let length = match range.end {
        Position::FromStart => {
            let at2 = s.adjusted(range.at2, 0, false, SUBTRACTION)?;
            format!("{at2} - {start} + 1")
        }
        Position::FromEnd => {
            let at2 = s.adjusted(range.at2, 0, false, SUBTRACTION)?;
            format!("count({list}) - {at2} - {start}")
        }
        _ => format!("count({list}) - {start}"),
    };
    Ok(Code::value(
        format!("array_slice({list}, {at1}, {length})"),
        FUNCTION_CALL,
    ))
}

/// Parenthesise a start offset before it is subtracted, unless it is a
/// number or already grouped.
fn grouped(at: &str) -> String {
    let wrapped = at.len() > 2 && at.starts_with('(') && at.ends_with(')');
    if is_number(at) || wrapped {
        at.to_string()
    } else {
        format!("({at})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped("2"), "2");
        assert_eq!(grouped("($i - 1)"), "($i - 1)");
        assert_eq!(grouped("$i"), "($i)");
        assert_eq!(grouped("count($xs) - 2"), "(count($xs) - 2)");
    }
}
