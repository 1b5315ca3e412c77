//! PHP handler catalog.
//!
//! One exhaustive match over [`Construct`]; each family lives in its own
//! module and receives the fields it needs already destructured.

mod lists;
mod logic;
mod loops;
mod math;
mod procedures;
mod text;
mod variables;

use quill_codegen::{Code, GenerateError, Handlers, Result, Session};
use quill_ir::{Construct, Node, Position};

use crate::Php;

/// Literal substituted for an empty text slot.
pub(crate) const EMPTY_TEXT: &str = "''";
/// Literal substituted for an empty list slot.
pub(crate) const EMPTY_LIST: &str = "array()";

impl Handlers for Php {
    fn render(&self, s: &mut Session<'_>, node: &Node) -> Result<Code> {
        use Construct::*;

        match &node.construct {
            ControlsIf {
                branches,
                has_else,
                else_body,
            } => logic::controls_if(s, node, branches, *has_else, else_body.as_deref()),
            LogicCompare { op, a, b } => logic::compare(s, *op, a.as_deref(), b.as_deref()),
            LogicOperation { op, a, b } => logic::operation(s, *op, a.as_deref(), b.as_deref()),
            LogicNegate { value } => logic::negate(s, value.as_deref()),
            LogicBoolean { value } => Ok(logic::boolean(*value)),
            LogicNull => Ok(logic::null()),
            LogicTernary {
                condition,
                then,
                otherwise,
            } => logic::ternary(
                s,
                condition.as_deref(),
                then.as_deref(),
                otherwise.as_deref(),
            ),

            ControlsRepeatExt { times, body } => {
                loops::repeat(s, times.as_deref(), body.as_deref())
            }
            ControlsWhileUntil {
                mode,
                condition,
                body,
            } => loops::while_until(s, *mode, condition.as_deref(), body.as_deref()),
            ControlsFor {
                variable,
                from,
                to,
                by,
                body,
            } => loops::count_with(
                s,
                variable,
                loops::Bounds {
                    from: from.as_deref(),
                    to: to.as_deref(),
                    by: by.as_deref(),
                },
                body.as_deref(),
            ),
            ControlsForEach {
                variable,
                list,
                body,
            } => loops::for_each(s, variable, list.as_deref(), body.as_deref()),
            ControlsFlowStatements { flow } => Ok(loops::flow(*flow)),

            MathNumber { value } => Ok(math::number(*value)),
            MathArithmetic { op, a, b } => math::arithmetic(s, *op, a.as_deref(), b.as_deref()),
            MathSingle { op, value } => math::single(s, *op, value.as_deref()),
            MathConstant { constant } => Ok(math::constant(*constant)),
            MathModulo { dividend, divisor } => {
                math::modulo(s, dividend.as_deref(), divisor.as_deref())
            }
            MathConstrain { value, low, high } => {
                math::constrain(s, value.as_deref(), low.as_deref(), high.as_deref())
            }
            MathRandomInt { from, to } => math::random_int(s, from.as_deref(), to.as_deref()),
            MathRandomFloat => Ok(math::random_float()),
            MathChange { variable, delta } => math::change(s, variable, delta.as_deref()),

            Text { text } => Ok(text::literal(s, text)),
            TextMultiline { text } => Ok(text::multiline(self, text)),
            TextJoin { items } => text::join(s, items),
            TextAppend { variable, text } => text::append(s, variable, text.as_deref()),
            TextLength { value } => text::length(s, value.as_deref()),
            TextIsEmpty { value } => text::is_empty(s, value.as_deref()),
            TextIndexOf { end, value, find } => {
                text::index_of(s, *end, value.as_deref(), find.as_deref())
            }
            TextCharAt {
                position,
                value,
                at,
            } => text::char_at(s, *position, value.as_deref(), at.as_deref()),
            TextGetSubstring {
                start,
                end,
                value,
                at1,
                at2,
            } => text::get_substring(
                s,
                value.as_deref(),
                Range::new(node, *start, *end, at1.as_deref(), at2.as_deref())?,
            ),
            TextPrint { value } => text::print(s, value.as_deref()),

            ListsCreateEmpty => Ok(lists::create_empty()),
            ListsCreateWith { items } => lists::create_with(s, items),
            ListsRepeat { item, count } => lists::repeat(s, item.as_deref(), count.as_deref()),
            ListsLength { value } => lists::length(s, value.as_deref()),
            ListsIsEmpty { value } => lists::is_empty(s, value.as_deref()),
            ListsGetIndex {
                mode,
                position,
                list,
                at,
            } => lists::get_index(s, *mode, *position, list.as_deref(), at.as_deref()),
            ListsSetIndex {
                mode,
                position,
                list,
                at,
                to,
            } => lists::set_index(
                s,
                *mode,
                *position,
                list.as_deref(),
                at.as_deref(),
                to.as_deref(),
            ),
            ListsGetSublist {
                start,
                end,
                list,
                at1,
                at2,
            } => lists::get_sublist(
                s,
                list.as_deref(),
                Range::new(node, *start, *end, at1.as_deref(), at2.as_deref())?,
            ),

            VariablesGet { variable } => variables::get(s, variable),
            VariablesSet { variable, value } => variables::set(s, variable, value.as_deref()),

            ProceduresDef {
                name,
                params,
                body,
                returns,
            } => procedures::define(
                s,
                node,
                procedures::Signature { name, params },
                body.as_deref(),
                returns.as_deref(),
            ),
            ProceduresCallReturn { name, args } => procedures::call(s, name, args),
            ProceduresCallNoReturn { name, args } => procedures::call_statement(s, name, args),
            ProceduresIfReturn {
                condition,
                has_return,
                value,
            } => procedures::if_return(s, condition.as_deref(), *has_return, value.as_deref()),
        }
    }
}

/// Endpoints of a sublist or substring.
pub(super) struct Range<'n> {
    pub start: Position,
    pub end: Position,
    pub at1: Option<&'n Node>,
    pub at2: Option<&'n Node>,
}

impl<'n> Range<'n> {
    /// A range may start from the start, the end or the first element, and
    /// end from the start, the end or at the last element.
    fn new(
        node: &Node,
        start: Position,
        end: Position,
        at1: Option<&'n Node>,
        at2: Option<&'n Node>,
    ) -> Result<Self> {
        let start_ok = matches!(
            start,
            Position::FromStart | Position::FromEnd | Position::First
        );
        let end_ok = matches!(end, Position::FromStart | Position::FromEnd | Position::Last);
        if !start_ok || !end_ok {
            return Err(GenerateError::unsupported(
                node,
                format!("range from {} to {}", start.as_str(), end.as_str()),
            ));
        }
        Ok(Self {
            start,
            end,
            at1,
            at2,
        })
    }

    /// Whether the range covers the whole sequence.
    pub fn is_whole(&self) -> bool {
        self.start == Position::First && self.end == Position::Last
    }
}

/// Whether `code` is a plain `$name` variable reference.
pub(crate) fn is_variable(code: &str) -> bool {
    code.strip_prefix('$').is_some_and(|name| {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// Whether `code` can be reused verbatim without caching it in a temporary:
/// a bare word or a numeric literal. Sigilled variables are not bare words.
pub(crate) fn is_simple(code: &str) -> bool {
    let word = !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    word || quill_core::is_number(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_simple() {
        assert!(is_simple("count"));
        assert!(!is_simple("$x"));
        assert!(is_simple("-3"));
        assert!(is_simple("1.5"));
        assert!(!is_simple("$a + 1"));
        assert!(!is_simple("f($a)"));
        assert!(!is_simple(""));
    }

    #[test]
    fn test_is_variable() {
        assert!(is_variable("$xs"));
        assert!(is_variable("$list_2"));
        assert!(!is_variable("$"));
        assert!(!is_variable("xs"));
        assert!(!is_variable("$a[0]"));
        assert!(!is_variable("array()"));
    }

    #[test]
    fn test_range_rejects_misplaced_endpoints() {
        let node = Node::new(Construct::LogicNull).with_id("r");
        assert!(Range::new(&node, Position::First, Position::Last, None, None).is_ok());
        let err = Range::new(&node, Position::Last, Position::FromStart, None, None)
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "unsupported logic_null (node 'r'): range from LAST to FROM_START"
        );
        assert!(Range::new(&node, Position::FromStart, Position::Random, None, None).is_err());
    }
}
