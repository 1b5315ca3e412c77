//! The closed set of constructs a node can carry.

use serde::{Deserialize, Serialize};

use crate::{
    ArithmeticOp, Child, CompareOp, Flow, ListMode, LogicOp, LoopMode, MathConstant, Node,
    Position, SearchEnd, SetMode, SingleOp,
};

/// One `if`/`else if` arm of `controls_if`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IfBranch {
    /// Value slot holding the condition.
    #[serde(default)]
    pub condition: Child,
    /// Statement slot executed when the condition holds.
    #[serde(default)]
    pub body: Child,
}

/// A construct kind together with its fields and child slots.
///
/// Value slots hold expression nodes; statement slots hold the first node
/// of a statement chain. Every slot is optional; handlers substitute a
/// documented default when a value slot is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Construct {
    // ------------------------------------------------------------------ logic
    ControlsIf {
        #[serde(default)]
        branches: Vec<IfBranch>,
        #[serde(default)]
        has_else: bool,
        #[serde(default)]
        else_body: Child,
    },
    LogicCompare {
        op: CompareOp,
        #[serde(default)]
        a: Child,
        #[serde(default)]
        b: Child,
    },
    LogicOperation {
        op: LogicOp,
        #[serde(default)]
        a: Child,
        #[serde(default)]
        b: Child,
    },
    LogicNegate {
        #[serde(default)]
        value: Child,
    },
    LogicBoolean {
        value: bool,
    },
    LogicNull,
    LogicTernary {
        #[serde(default)]
        condition: Child,
        #[serde(default)]
        then: Child,
        #[serde(default)]
        otherwise: Child,
    },

    // ------------------------------------------------------------------ loops
    ControlsRepeatExt {
        #[serde(default)]
        times: Child,
        #[serde(default)]
        body: Child,
    },
    ControlsWhileUntil {
        mode: LoopMode,
        #[serde(default)]
        condition: Child,
        #[serde(default)]
        body: Child,
    },
    ControlsFor {
        variable: String,
        #[serde(default)]
        from: Child,
        #[serde(default)]
        to: Child,
        #[serde(default)]
        by: Child,
        #[serde(default)]
        body: Child,
    },
    ControlsForEach {
        variable: String,
        #[serde(default)]
        list: Child,
        #[serde(default)]
        body: Child,
    },
    ControlsFlowStatements {
        flow: Flow,
    },

    // ------------------------------------------------------------------- math
    MathNumber {
        value: f64,
    },
    MathArithmetic {
        op: ArithmeticOp,
        #[serde(default)]
        a: Child,
        #[serde(default)]
        b: Child,
    },
    MathSingle {
        op: SingleOp,
        #[serde(default)]
        value: Child,
    },
    MathConstant {
        constant: MathConstant,
    },
    MathModulo {
        #[serde(default)]
        dividend: Child,
        #[serde(default)]
        divisor: Child,
    },
    MathConstrain {
        #[serde(default)]
        value: Child,
        #[serde(default)]
        low: Child,
        #[serde(default)]
        high: Child,
    },
    MathRandomInt {
        #[serde(default)]
        from: Child,
        #[serde(default)]
        to: Child,
    },
    MathRandomFloat,
    MathChange {
        variable: String,
        #[serde(default)]
        delta: Child,
    },

    // ------------------------------------------------------------------- text
    Text {
        text: String,
    },
    TextMultiline {
        text: String,
    },
    TextJoin {
        #[serde(default)]
        items: Vec<Option<Node>>,
    },
    TextAppend {
        variable: String,
        #[serde(default)]
        text: Child,
    },
    TextLength {
        #[serde(default)]
        value: Child,
    },
    TextIsEmpty {
        #[serde(default)]
        value: Child,
    },
    TextIndexOf {
        end: SearchEnd,
        #[serde(default)]
        value: Child,
        #[serde(default)]
        find: Child,
    },
    TextCharAt {
        #[serde(default, rename = "where")]
        position: Position,
        #[serde(default)]
        value: Child,
        #[serde(default)]
        at: Child,
    },
    TextGetSubstring {
        #[serde(default, rename = "where1")]
        start: Position,
        #[serde(default, rename = "where2")]
        end: Position,
        #[serde(default)]
        value: Child,
        #[serde(default)]
        at1: Child,
        #[serde(default)]
        at2: Child,
    },
    TextPrint {
        #[serde(default)]
        value: Child,
    },

    // ------------------------------------------------------------------ lists
    ListsCreateEmpty,
    ListsCreateWith {
        #[serde(default)]
        items: Vec<Option<Node>>,
    },
    ListsRepeat {
        #[serde(default)]
        item: Child,
        #[serde(default)]
        count: Child,
    },
    ListsLength {
        #[serde(default)]
        value: Child,
    },
    ListsIsEmpty {
        #[serde(default)]
        value: Child,
    },
    ListsGetIndex {
        #[serde(default)]
        mode: ListMode,
        #[serde(default, rename = "where")]
        position: Position,
        #[serde(default)]
        list: Child,
        #[serde(default)]
        at: Child,
    },
    ListsSetIndex {
        #[serde(default)]
        mode: SetMode,
        #[serde(default, rename = "where")]
        position: Position,
        #[serde(default)]
        list: Child,
        #[serde(default)]
        at: Child,
        #[serde(default)]
        to: Child,
    },
    ListsGetSublist {
        #[serde(default, rename = "where1")]
        start: Position,
        #[serde(default, rename = "where2")]
        end: Position,
        #[serde(default)]
        list: Child,
        #[serde(default)]
        at1: Child,
        #[serde(default)]
        at2: Child,
    },

    // -------------------------------------------------------------- variables
    VariablesGet {
        variable: String,
    },
    VariablesSet {
        variable: String,
        #[serde(default)]
        value: Child,
    },

    // ------------------------------------------------------------- procedures
    ProceduresDef {
        name: String,
        #[serde(default)]
        params: Vec<String>,
        #[serde(default)]
        body: Child,
        #[serde(default)]
        returns: Child,
    },
    ProceduresCallReturn {
        name: String,
        #[serde(default)]
        args: Vec<Option<Node>>,
    },
    ProceduresCallNoReturn {
        name: String,
        #[serde(default)]
        args: Vec<Option<Node>>,
    },
    ProceduresIfReturn {
        #[serde(default)]
        condition: Child,
        #[serde(default)]
        has_return: bool,
        #[serde(default)]
        value: Child,
    },
}

impl Construct {
    /// The construct's kind name as written in program files.
    pub fn kind(&self) -> &'static str {
        match self {
            Construct::ControlsIf { .. } => "controls_if",
            Construct::LogicCompare { .. } => "logic_compare",
            Construct::LogicOperation { .. } => "logic_operation",
            Construct::LogicNegate { .. } => "logic_negate",
            Construct::LogicBoolean { .. } => "logic_boolean",
            Construct::LogicNull => "logic_null",
            Construct::LogicTernary { .. } => "logic_ternary",
            Construct::ControlsRepeatExt { .. } => "controls_repeat_ext",
            Construct::ControlsWhileUntil { .. } => "controls_while_until",
            Construct::ControlsFor { .. } => "controls_for",
            Construct::ControlsForEach { .. } => "controls_for_each",
            Construct::ControlsFlowStatements { .. } => "controls_flow_statements",
            Construct::MathNumber { .. } => "math_number",
            Construct::MathArithmetic { .. } => "math_arithmetic",
            Construct::MathSingle { .. } => "math_single",
            Construct::MathConstant { .. } => "math_constant",
            Construct::MathModulo { .. } => "math_modulo",
            Construct::MathConstrain { .. } => "math_constrain",
            Construct::MathRandomInt { .. } => "math_random_int",
            Construct::MathRandomFloat => "math_random_float",
            Construct::MathChange { .. } => "math_change",
            Construct::Text { .. } => "text",
            Construct::TextMultiline { .. } => "text_multiline",
            Construct::TextJoin { .. } => "text_join",
            Construct::TextAppend { .. } => "text_append",
            Construct::TextLength { .. } => "text_length",
            Construct::TextIsEmpty { .. } => "text_is_empty",
            Construct::TextIndexOf { .. } => "text_index_of",
            Construct::TextCharAt { .. } => "text_char_at",
            Construct::TextGetSubstring { .. } => "text_get_substring",
            Construct::TextPrint { .. } => "text_print",
            Construct::ListsCreateEmpty => "lists_create_empty",
            Construct::ListsCreateWith { .. } => "lists_create_with",
            Construct::ListsRepeat { .. } => "lists_repeat",
            Construct::ListsLength { .. } => "lists_length",
            Construct::ListsIsEmpty { .. } => "lists_is_empty",
            Construct::ListsGetIndex { .. } => "lists_get_index",
            Construct::ListsSetIndex { .. } => "lists_set_index",
            Construct::ListsGetSublist { .. } => "lists_get_sublist",
            Construct::VariablesGet { .. } => "variables_get",
            Construct::VariablesSet { .. } => "variables_set",
            Construct::ProceduresDef { .. } => "procedures_def",
            Construct::ProceduresCallReturn { .. } => "procedures_call_return",
            Construct::ProceduresCallNoReturn { .. } => "procedures_call_no_return",
            Construct::ProceduresIfReturn { .. } => "procedures_if_return",
        }
    }

    /// Nodes plugged into this construct's value slots, in slot order.
    ///
    /// Empty slots are skipped. Statement slots are not included.
    pub fn value_inputs(&self) -> Vec<&Node> {
        let slots: Vec<&Child> = match self {
            Construct::ControlsIf { branches, .. } => {
                branches.iter().map(|b| &b.condition).collect()
            }
            Construct::LogicCompare { a, b, .. }
            | Construct::LogicOperation { a, b, .. }
            | Construct::MathArithmetic { a, b, .. } => vec![a, b],
            Construct::LogicNegate { value }
            | Construct::MathSingle { value, .. }
            | Construct::TextLength { value }
            | Construct::TextIsEmpty { value }
            | Construct::TextPrint { value }
            | Construct::ListsLength { value }
            | Construct::ListsIsEmpty { value }
            | Construct::VariablesSet { value, .. } => vec![value],
            Construct::LogicTernary {
                condition,
                then,
                otherwise,
            } => vec![condition, then, otherwise],
            Construct::ControlsRepeatExt { times, .. } => vec![times],
            Construct::ControlsWhileUntil { condition, .. } => vec![condition],
            Construct::ControlsFor { from, to, by, .. } => vec![from, to, by],
            Construct::ControlsForEach { list, .. } => vec![list],
            Construct::MathModulo { dividend, divisor } => vec![dividend, divisor],
            Construct::MathConstrain { value, low, high } => vec![value, low, high],
            Construct::MathRandomInt { from, to } => vec![from, to],
            Construct::MathChange { delta, .. } => vec![delta],
            Construct::TextAppend { text, .. } => vec![text],
            Construct::TextIndexOf { value, find, .. } => vec![value, find],
            Construct::TextCharAt { value, at, .. } => vec![value, at],
            Construct::ListsRepeat { item, count } => vec![item, count],
            Construct::ListsGetIndex { list, at, .. } => vec![list, at],
            Construct::ListsSetIndex { list, at, to, .. } => vec![list, at, to],
            Construct::TextGetSubstring {
                value: source,
                at1,
                at2,
                ..
            }
            | Construct::ListsGetSublist {
                list: source,
                at1,
                at2,
                ..
            } => vec![source, at1, at2],
            Construct::ProceduresDef { returns, .. } => vec![returns],
            Construct::ProceduresIfReturn {
                condition, value, ..
            } => vec![condition, value],
            Construct::TextJoin { items }
            | Construct::ListsCreateWith { items }
            | Construct::ProceduresCallReturn { args: items, .. }
            | Construct::ProceduresCallNoReturn { args: items, .. } => {
                return items.iter().flatten().collect();
            }
            Construct::LogicBoolean { .. }
            | Construct::LogicNull
            | Construct::ControlsFlowStatements { .. }
            | Construct::MathNumber { .. }
            | Construct::MathConstant { .. }
            | Construct::MathRandomFloat
            | Construct::Text { .. }
            | Construct::TextMultiline { .. }
            | Construct::ListsCreateEmpty
            | Construct::VariablesGet { .. } => Vec::new(),
        };
        slots.into_iter().filter_map(|c| c.as_deref()).collect()
    }

    /// The variable id this construct reads or writes, if any.
    pub fn variable_ref(&self) -> Option<&str> {
        match self {
            Construct::ControlsFor { variable, .. }
            | Construct::ControlsForEach { variable, .. }
            | Construct::MathChange { variable, .. }
            | Construct::TextAppend { variable, .. }
            | Construct::VariablesGet { variable }
            | Construct::VariablesSet { variable, .. } => Some(variable),
            _ => None,
        }
    }

    /// First nodes of the statement chains held by this construct's
    /// statement slots, in slot order.
    pub fn statement_inputs(&self) -> Vec<&Node> {
        let slots: Vec<&Child> = match self {
            Construct::ControlsIf {
                branches,
                else_body,
                ..
            } => branches
                .iter()
                .map(|b| &b.body)
                .chain(std::iter::once(else_body))
                .collect(),
            Construct::ControlsRepeatExt { body, .. }
            | Construct::ControlsWhileUntil { body, .. }
            | Construct::ControlsFor { body, .. }
            | Construct::ControlsForEach { body, .. }
            | Construct::ProceduresDef { body, .. } => vec![body],
            _ => Vec::new(),
        };
        slots.into_iter().filter_map(|c| c.as_deref()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> Child {
        Some(Box::new(Node::new(Construct::MathNumber { value })))
    }

    #[test]
    fn test_kind_matches_serde_tag() {
        let construct = Construct::ListsGetIndex {
            mode: ListMode::Get,
            position: Position::FromEnd,
            list: None,
            at: None,
        };
        let json = serde_json::to_value(&construct).unwrap();
        assert_eq!(json["kind"], construct.kind());
        assert_eq!(json["where"], "FROM_END");
    }

    #[test]
    fn test_range_positions_deserialize() {
        let construct: Construct = serde_json::from_str(
            r#"{ "kind": "lists_get_sublist", "where1": "FROM_END", "where2": "LAST" }"#,
        )
        .unwrap();
        assert_eq!(
            construct,
            Construct::ListsGetSublist {
                start: Position::FromEnd,
                end: Position::Last,
                list: None,
                at1: None,
                at2: None,
            }
        );
    }

    #[test]
    fn test_set_index_value_inputs() {
        let construct = Construct::ListsSetIndex {
            mode: SetMode::Insert,
            position: Position::Random,
            list: None,
            at: number(2.0),
            to: number(3.0),
        };
        assert_eq!(construct.value_inputs().len(), 2);
        assert_eq!(construct.kind(), "lists_set_index");
    }

    #[test]
    fn test_value_inputs_skip_empty_slots() {
        let construct = Construct::MathArithmetic {
            op: ArithmeticOp::Add,
            a: number(1.0),
            b: None,
        };
        assert_eq!(construct.value_inputs().len(), 1);
    }

    #[test]
    fn test_value_inputs_of_item_lists() {
        let construct = Construct::ListsCreateWith {
            items: vec![
                Some(Node::new(Construct::LogicNull)),
                None,
                Some(Node::new(Construct::LogicBoolean { value: true })),
            ],
        };
        let kinds: Vec<_> = construct
            .value_inputs()
            .iter()
            .map(|n| n.construct.kind())
            .collect();
        assert_eq!(kinds, vec!["logic_null", "logic_boolean"]);
    }

    #[test]
    fn test_variable_ref() {
        let construct = Construct::MathChange {
            variable: "v1".into(),
            delta: None,
        };
        assert_eq!(construct.variable_ref(), Some("v1"));
        assert_eq!(Construct::LogicNull.variable_ref(), None);
    }

    #[test]
    fn test_statement_inputs_exclude_values() {
        let construct = Construct::ControlsIf {
            branches: vec![IfBranch {
                condition: Some(Box::new(Node::new(Construct::LogicBoolean { value: true }))),
                body: Some(Box::new(Node::new(Construct::ControlsFlowStatements {
                    flow: Flow::Break,
                }))),
            }],
            has_else: true,
            else_body: None,
        };
        assert_eq!(construct.value_inputs().len(), 1);
        assert_eq!(construct.statement_inputs().len(), 1);
        assert_eq!(
            construct.statement_inputs()[0].construct.kind(),
            "controls_flow_statements"
        );
    }
}
