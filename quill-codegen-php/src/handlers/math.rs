//! Numbers and arithmetic.

use quill_codegen::{Code, NameCategory, Result, Session};
use quill_core::format_number;
use quill_ir::{ArithmeticOp, MathConstant, Node, SingleOp};

use crate::orders::*;

pub(super) fn number(value: f64) -> Code {
    let rank = if value < 0.0 { UNARY_NEGATION } else { ATOMIC };
    let text = if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format_number(value)
    };
    Code::value(text, rank)
}

pub(super) fn arithmetic(
    s: &mut Session<'_>,
    op: ArithmeticOp,
    a: Option<&Node>,
    b: Option<&Node>,
) -> Result<Code> {
    let (operator, rank) = match op {
        ArithmeticOp::Add => ("+", ADDITION),
        ArithmeticOp::Minus => ("-", SUBTRACTION),
        ArithmeticOp::Multiply => ("*", MULTIPLICATION),
        ArithmeticOp::Divide => ("/", DIVISION),
        ArithmeticOp::Power => ("**", POWER),
    };
    let a = s.value_or(a, rank, "0")?;
    let b = s.value_or(b, rank, "0")?;
    Ok(Code::value(format!("{a} {operator} {b}"), rank))
}

pub(super) fn single(s: &mut Session<'_>, op: SingleOp, value: Option<&Node>) -> Result<Code> {
    let arg_rank = match op {
        SingleOp::Neg => UNARY_NEGATION,
        SingleOp::Sin | SingleOp::Cos | SingleOp::Tan => DIVISION,
        _ => NONE,
    };
    let arg = s.value_or(value, arg_rank, "0")?;
    let (code, rank) = match op {
        SingleOp::Neg => {
            // `--x` is a decrement.
            let gap = if arg.starts_with('-') { " " } else { "" };
            (format!("-{gap}{arg}"), UNARY_NEGATION)
        }
        SingleOp::Abs => (format!("abs({arg})"), FUNCTION_CALL),
        SingleOp::Root => (format!("sqrt({arg})"), FUNCTION_CALL),
        SingleOp::Ln => (format!("log({arg})"), FUNCTION_CALL),
        SingleOp::Exp => (format!("exp({arg})"), FUNCTION_CALL),
        SingleOp::Pow10 => (format!("pow(10,{arg})"), FUNCTION_CALL),
        SingleOp::Round => (format!("round({arg})"), FUNCTION_CALL),
        SingleOp::RoundUp => (format!("ceil({arg})"), FUNCTION_CALL),
        SingleOp::RoundDown => (format!("floor({arg})"), FUNCTION_CALL),
        SingleOp::Sin => (format!("sin({arg} / 180 * pi())"), FUNCTION_CALL),
        SingleOp::Cos => (format!("cos({arg} / 180 * pi())"), FUNCTION_CALL),
        SingleOp::Tan => (format!("tan({arg} / 180 * pi())"), FUNCTION_CALL),
        SingleOp::Log10 => (format!("log({arg}) / log(10)"), DIVISION),
        SingleOp::Asin => (format!("asin({arg}) / pi() * 180"), DIVISION),
        SingleOp::Acos => (format!("acos({arg}) / pi() * 180"), DIVISION),
        SingleOp::Atan => (format!("atan({arg}) / pi() * 180"), DIVISION),
    };
    Ok(Code::value(code, rank))
}

pub(super) fn constant(constant: MathConstant) -> Code {
    match constant {
        MathConstant::Pi => Code::value("M_PI", ATOMIC),
        MathConstant::E => Code::value("M_E", ATOMIC),
        MathConstant::GoldenRatio => Code::value("(1 + sqrt(5)) / 2", DIVISION),
        MathConstant::Sqrt2 => Code::value("M_SQRT2", ATOMIC),
        MathConstant::Sqrt1_2 => Code::value("M_SQRT1_2", ATOMIC),
        MathConstant::Infinity => Code::value("INF", ATOMIC),
    }
}

pub(super) fn modulo(
    s: &mut Session<'_>,
    dividend: Option<&Node>,
    divisor: Option<&Node>,
) -> Result<Code> {
    let dividend = s.value_or(dividend, MODULUS, "0")?;
    let divisor = s.value_or(divisor, MODULUS, "0")?;
    Ok(Code::value(format!("{dividend} % {divisor}"), MODULUS))
}

pub(super) fn constrain(
    s: &mut Session<'_>,
    value: Option<&Node>,
    low: Option<&Node>,
    high: Option<&Node>,
) -> Result<Code> {
    let value = s.value_or(value, COMMA, "0")?;
    let low = s.value_or(low, COMMA, "0")?;
    let high = s.value_or(high, COMMA, "INF")?;
    Ok(Code::value(
        format!("min(max({value}, {low}), {high})"),
        FUNCTION_CALL,
    ))
}

pub(super) fn random_int(
    s: &mut Session<'_>,
    from: Option<&Node>,
    to: Option<&Node>,
) -> Result<Code> {
    let from = s.value_or(from, COMMA, "0")?;
    let to = s.value_or(to, COMMA, "0")?;
    let name = s.provide_function(
        "math_random_int",
        &[
            "function {{fn}}($a, $b) {",
            "  if ($a > $b) {",
            "    return rand($b, $a);",
            "  }",
            "  return rand($a, $b);",
            "}",
        ],
    )?;
    Ok(Code::value(format!("{name}({from}, {to})"), FUNCTION_CALL))
}

pub(super) fn random_float() -> Code {
    Code::value("(float)rand()/(float)getrandmax()", FUNCTION_CALL)
}

pub(super) fn change(s: &mut Session<'_>, variable: &str, delta: Option<&Node>) -> Result<Code> {
    let delta = s.value_or(delta, ADDITION, "0")?;
    let name = s.get_name(variable, NameCategory::Variable)?;
    Ok(Code::statement(format!("{name} += {delta};\n")))
}
