//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. It provides [`Toy`], a small C-like dialect that
//! implements just enough constructs to exercise the session.

use quill_core::format_number;
use quill_ir::{ArithmeticOp, Construct, ListMode, Node, Position};

use crate::dialect::{Code, Dialect, Handlers};
use crate::error::{GenerateError, Result};
use crate::names::{NameCategory, NameDatabase};
use crate::precedence::{ElisionPair, OrderTable};
use crate::session::Session;

/// Precedence ranks of the [`Toy`] dialect.
pub mod orders {
    use crate::precedence::Precedence;

    pub const ATOMIC: Precedence = Precedence::tier(0);
    pub const MEMBER: Precedence = Precedence::tier(1);
    pub const UNARY_NEGATION: Precedence = Precedence::new(4, 2);
    pub const MULTIPLICATION: Precedence = Precedence::new(5, 1);
    pub const DIVISION: Precedence = Precedence::new(5, 2);
    pub const ADDITION: Precedence = Precedence::new(6, 1);
    pub const SUBTRACTION: Precedence = Precedence::new(6, 2);
    pub const ASSIGNMENT: Precedence = Precedence::tier(20);
    pub const NONE: Precedence = Precedence::tier(99);
}

static OVERRIDES: &[ElisionPair] = &[
    ElisionPair(orders::MULTIPLICATION, orders::MULTIPLICATION),
    ElisionPair(orders::ADDITION, orders::ADDITION),
    ElisionPair(orders::ATOMIC, orders::ATOMIC),
    ElisionPair(orders::NONE, orders::NONE),
];

static TABLE: OrderTable = OrderTable {
    atomic: orders::ATOMIC,
    addition: orders::ADDITION,
    subtraction: orders::SUBTRACTION,
    unary_negation: orders::UNARY_NEGATION,
    overrides: OVERRIDES,
    named: &[
        ("ATOMIC", orders::ATOMIC),
        ("MEMBER", orders::MEMBER),
        ("UNARY_NEGATION", orders::UNARY_NEGATION),
        ("MULTIPLICATION", orders::MULTIPLICATION),
        ("DIVISION", orders::DIVISION),
        ("ADDITION", orders::ADDITION),
        ("SUBTRACTION", orders::SUBTRACTION),
        ("ASSIGNMENT", orders::ASSIGNMENT),
        ("NONE", orders::NONE),
    ],
};

/// Minimal test dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toy;

/// A fresh name database for [`Toy`].
pub fn toy_names() -> NameDatabase {
    NameDatabase::for_dialect(&Toy)
}

impl Dialect for Toy {
    fn name(&self) -> &'static str {
        "toy"
    }

    fn file_extension(&self) -> &'static str {
        "toy"
    }

    fn orders(&self) -> &OrderTable {
        &TABLE
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        &["print", "var", "while"]
    }

    fn comment_prefix(&self) -> &'static str {
        "// "
    }

    fn statement_terminator(&self) -> &'static str {
        ";"
    }

    fn quote(&self, text: &str) -> String {
        format!("\"{}\"", text.replace('"', "\\\""))
    }

    fn declare_variables(&self, names: &[String]) -> Option<String> {
        (!names.is_empty()).then(|| {
            names
                .iter()
                .map(|n| format!("var {n};"))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

impl Handlers for Toy {
    fn render(&self, session: &mut Session<'_>, node: &Node) -> Result<Code> {
        use orders::*;

        match &node.construct {
            Construct::MathNumber { value } => {
                let rank = if *value < 0.0 { UNARY_NEGATION } else { ATOMIC };
                Ok(Code::value(format_number(*value), rank))
            }
            Construct::MathArithmetic { op, a, b } => {
                let (symbol, rank) = match op {
                    ArithmeticOp::Add => ("+", ADDITION),
                    ArithmeticOp::Minus => ("-", SUBTRACTION),
                    ArithmeticOp::Multiply => ("*", MULTIPLICATION),
                    ArithmeticOp::Divide => ("/", DIVISION),
                    ArithmeticOp::Power => {
                        return Err(GenerateError::unsupported(node, "no power operator"));
                    }
                };
                let a = session.value_or(a.as_deref(), rank, "0")?;
                let b = session.value_or(b.as_deref(), rank, "0")?;
                Ok(Code::value(format!("{a} {symbol} {b}"), rank))
            }
            Construct::Text { text } => Ok(Code::value(session.quote(text), ATOMIC)),
            Construct::VariablesGet { variable } => Ok(Code::value(
                session.get_name(variable, NameCategory::Variable)?,
                ATOMIC,
            )),
            Construct::VariablesSet { variable, value } => {
                let name = session.get_name(variable, NameCategory::Variable)?;
                let value = session.value_or(value.as_deref(), ASSIGNMENT, "0")?;
                Ok(Code::statement(format!("{name} = {value};\n")))
            }
            Construct::TextPrint { value } => {
                let value = session.value_or(value.as_deref(), NONE, "\"\"")?;
                Ok(Code::statement(format!("print({value});\n")))
            }
            Construct::ControlsRepeatExt { times, body } => {
                let times = session.value_or(times.as_deref(), NONE, "0")?;
                let body = session.statement_to_code(body.as_deref())?;
                Ok(Code::statement(format!("repeat ({times}) {{\n{body}}}\n")))
            }
            Construct::MathRandomFloat => {
                let name = session.provide_function(
                    "rand_float",
                    &["function {{fn}}() {", "  return random();", "}"],
                )?;
                Ok(Code::value(format!("{name}()"), MEMBER))
            }
            Construct::ListsGetIndex {
                mode: ListMode::Get,
                position: Position::FromStart,
                list,
                at,
            } => {
                let list = session.value_or(list.as_deref(), MEMBER, "[]")?;
                let at = session.adjusted(at.as_deref(), 0, false, NONE)?;
                Ok(Code::value(format!("{list}[{at}]"), MEMBER))
            }
            Construct::ProceduresDef { name, .. } => {
                let name = session.get_name(name, NameCategory::Function)?;
                session.define(format!("%{name}"), format!("function {name}() {{}}"));
                Ok(Code::Handled)
            }
            _ => Err(GenerateError::unsupported(node, "not available in toy")),
        }
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
