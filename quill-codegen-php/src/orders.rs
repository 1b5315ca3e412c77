//! PHP operator precedence.
//!
//! Ranks follow <http://php.net/manual/en/language.operators.precedence.php>.
//! Operators sharing a tier are split by sub-rank where mixing them matters.

use quill_codegen::{ElisionPair, OrderTable, Precedence};

pub const ATOMIC: Precedence = Precedence::tier(0); // 0 "" ...
pub const CLONE: Precedence = Precedence::tier(1); // clone
pub const NEW: Precedence = Precedence::tier(1); // new
pub const MEMBER: Precedence = Precedence::new(2, 1); // []
pub const FUNCTION_CALL: Precedence = Precedence::new(2, 2); // ()
pub const POWER: Precedence = Precedence::tier(3); // **
pub const INCREMENT: Precedence = Precedence::tier(4); // ++
pub const DECREMENT: Precedence = Precedence::tier(4); // --
pub const BITWISE_NOT: Precedence = Precedence::tier(4); // ~
pub const CAST: Precedence = Precedence::tier(4); // (int) (float) (string) ...
pub const SUPPRESS_ERROR: Precedence = Precedence::tier(4); // @
pub const INSTANCEOF: Precedence = Precedence::tier(5); // instanceof
pub const LOGICAL_NOT: Precedence = Precedence::tier(6); // !
pub const UNARY_PLUS: Precedence = Precedence::new(7, 1); // +
pub const UNARY_NEGATION: Precedence = Precedence::new(7, 2); // -
pub const MULTIPLICATION: Precedence = Precedence::new(8, 1); // *
pub const DIVISION: Precedence = Precedence::new(8, 2); // /
pub const MODULUS: Precedence = Precedence::new(8, 3); // %
pub const ADDITION: Precedence = Precedence::new(9, 1); // +
pub const SUBTRACTION: Precedence = Precedence::new(9, 2); // -
pub const STRING_CONCAT: Precedence = Precedence::new(9, 3); // .
pub const BITWISE_SHIFT: Precedence = Precedence::tier(10); // << >>
pub const RELATIONAL: Precedence = Precedence::tier(11); // < <= > >=
pub const EQUALITY: Precedence = Precedence::tier(12); // == != === !==
pub const REFERENCE: Precedence = Precedence::tier(13); // &
pub const BITWISE_AND: Precedence = Precedence::tier(13); // &
pub const BITWISE_XOR: Precedence = Precedence::tier(14); // ^
pub const BITWISE_OR: Precedence = Precedence::tier(15); // |
pub const LOGICAL_AND: Precedence = Precedence::tier(16); // &&
pub const LOGICAL_OR: Precedence = Precedence::tier(17); // ||
pub const IF_NULL: Precedence = Precedence::tier(18); // ??
pub const CONDITIONAL: Precedence = Precedence::tier(19); // ?:
pub const ASSIGNMENT: Precedence = Precedence::tier(20); // = += -= ...
pub const LOGICAL_AND_WEAK: Precedence = Precedence::tier(21); // and
pub const LOGICAL_XOR: Precedence = Precedence::tier(22); // xor
pub const LOGICAL_OR_WEAK: Precedence = Precedence::tier(23); // or
pub const COMMA: Precedence = Precedence::tier(24); // ,
pub const NONE: Precedence = Precedence::tier(99); // (...)

/// Outer/inner pairings that do not need parentheses.
pub static OVERRIDES: &[ElisionPair] = &[
    // (foo()).bar() -> foo().bar()
    // (foo())[0] -> foo()[0]
    ElisionPair(MEMBER, FUNCTION_CALL),
    // (foo[0])[1] -> foo[0][1]
    ElisionPair(MEMBER, MEMBER),
    // !(!foo) -> !!foo
    ElisionPair(LOGICAL_NOT, LOGICAL_NOT),
    // a * (b * c) -> a * b * c
    ElisionPair(MULTIPLICATION, MULTIPLICATION),
    // a + (b + c) -> a + b + c
    ElisionPair(ADDITION, ADDITION),
    // a && (b && c) -> a && b && c
    ElisionPair(LOGICAL_AND, LOGICAL_AND),
    // a || (b || c) -> a || b || c
    ElisionPair(LOGICAL_OR, LOGICAL_OR),
    ElisionPair(ATOMIC, ATOMIC),
    ElisionPair(NONE, NONE),
];

static NAMED: &[(&str, Precedence)] = &[
    ("ATOMIC", ATOMIC),
    ("CLONE", CLONE),
    ("NEW", NEW),
    ("MEMBER", MEMBER),
    ("FUNCTION_CALL", FUNCTION_CALL),
    ("POWER", POWER),
    ("INCREMENT", INCREMENT),
    ("DECREMENT", DECREMENT),
    ("BITWISE_NOT", BITWISE_NOT),
    ("CAST", CAST),
    ("SUPPRESS_ERROR", SUPPRESS_ERROR),
    ("INSTANCEOF", INSTANCEOF),
    ("LOGICAL_NOT", LOGICAL_NOT),
    ("UNARY_PLUS", UNARY_PLUS),
    ("UNARY_NEGATION", UNARY_NEGATION),
    ("MULTIPLICATION", MULTIPLICATION),
    ("DIVISION", DIVISION),
    ("MODULUS", MODULUS),
    ("ADDITION", ADDITION),
    ("SUBTRACTION", SUBTRACTION),
    ("STRING_CONCAT", STRING_CONCAT),
    ("BITWISE_SHIFT", BITWISE_SHIFT),
    ("RELATIONAL", RELATIONAL),
    ("EQUALITY", EQUALITY),
    ("REFERENCE", REFERENCE),
    ("BITWISE_AND", BITWISE_AND),
    ("BITWISE_XOR", BITWISE_XOR),
    ("BITWISE_OR", BITWISE_OR),
    ("LOGICAL_AND", LOGICAL_AND),
    ("LOGICAL_OR", LOGICAL_OR),
    ("IF_NULL", IF_NULL),
    ("CONDITIONAL", CONDITIONAL),
    ("ASSIGNMENT", ASSIGNMENT),
    ("LOGICAL_AND_WEAK", LOGICAL_AND_WEAK),
    ("LOGICAL_XOR", LOGICAL_XOR),
    ("LOGICAL_OR_WEAK", LOGICAL_OR_WEAK),
    ("COMMA", COMMA),
    ("NONE", NONE),
];

/// The PHP precedence table.
pub static TABLE: OrderTable = OrderTable {
    atomic: ATOMIC,
    addition: ADDITION,
    subtraction: SUBTRACTION,
    unary_negation: UNARY_NEGATION,
    overrides: OVERRIDES,
    named: NAMED,
};
