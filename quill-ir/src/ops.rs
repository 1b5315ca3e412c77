//! Field enums selecting a construct's operator or mode.

use serde::{Deserialize, Serialize};

/// Comparison operator of `logic_compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompareOp {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    /// Whether this is an equality test rather than an ordering test.
    pub fn is_equality(&self) -> bool {
        matches!(self, CompareOp::Eq | CompareOp::Neq)
    }
}

/// Boolean connective of `logic_operation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicOp {
    And,
    Or,
}

/// Binary operator of `math_arithmetic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArithmeticOp {
    Add,
    Minus,
    Multiply,
    Divide,
    Power,
}

/// Single-operand function of `math_single`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SingleOp {
    Root,
    Abs,
    Neg,
    Ln,
    Log10,
    Exp,
    Pow10,
    Round,
    #[serde(rename = "ROUNDUP")]
    RoundUp,
    #[serde(rename = "ROUNDDOWN")]
    RoundDown,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

/// Named constant of `math_constant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MathConstant {
    Pi,
    E,
    GoldenRatio,
    Sqrt2,
    #[serde(rename = "SQRT1_2")]
    Sqrt1_2,
    Infinity,
}

/// Loop condition polarity of `controls_while_until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoopMode {
    While,
    Until,
}

/// Jump kind of `controls_flow_statements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flow {
    Break,
    Continue,
}

/// Which occurrence a search looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchEnd {
    First,
    Last,
}

/// Where an element is addressed within a list or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    #[default]
    FromStart,
    FromEnd,
    First,
    Last,
    Random,
}

impl Position {
    /// Get the canonical field value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::FromStart => "FROM_START",
            Position::FromEnd => "FROM_END",
            Position::First => "FIRST",
            Position::Last => "LAST",
            Position::Random => "RANDOM",
        }
    }
}

/// Access mode of `lists_get_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListMode {
    #[default]
    Get,
    GetRemove,
    Remove,
}

impl ListMode {
    /// Get the canonical field value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMode::Get => "GET",
            ListMode::GetRemove => "GET_REMOVE",
            ListMode::Remove => "REMOVE",
        }
    }

    /// Whether this mode produces a value (as opposed to a bare statement).
    pub fn yields_value(&self) -> bool {
        !matches!(self, ListMode::Remove)
    }
}

/// Write mode of `lists_set_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetMode {
    #[default]
    Set,
    Insert,
}

impl SetMode {
    /// Get the canonical field value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SetMode::Set => "SET",
            SetMode::Insert => "INSERT",
        }
    }
}
