//! Adjusted-index arithmetic.
//!
//! List and text accessors convert between the program's index origin and
//! the target's zero-based indexing. The conversion is an addition, a
//! subtraction, a negation or a mix of them; literal indices are folded at
//! generation time so `$list[0]` is emitted rather than `$list[1 - 1]`.

use std::cmp::Ordering;

use quill_core::{format_number, parse_number};

use crate::precedence::{OrderTable, RenderedExpr};

/// Whether program-level indices count from zero or from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexOrigin {
    Zero,
    #[default]
    One,
}

impl IndexOrigin {
    pub fn from_one_based(one_based: bool) -> Self {
        if one_based { Self::One } else { Self::Zero }
    }

    /// Amount subtracted from a logical delta to reach zero-based indexing.
    pub fn offset(self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Literal used when the index slot is empty.
    pub fn default_literal(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
        }
    }
}

/// A request to shift and/or negate an index expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    /// Constant added to the base; already origin-shifted.
    pub delta: i64,
    /// Negate the result.
    pub negate: bool,
    /// Rank of the context the result is embedded into.
    pub context: crate::Precedence,
}

/// Apply an [`Adjustment`] to an already-rendered base expression.
///
/// An absent base falls back to the origin's default literal. Numeric
/// literals are folded and never parenthesised. Dynamic bases get explicit
/// arithmetic, wrapped when the composed operator's tier is not strictly
/// tighter than the context's tier.
pub fn adjust_index(
    base: Option<RenderedExpr>,
    adjustment: Adjustment,
    origin: IndexOrigin,
    orders: &OrderTable,
) -> RenderedExpr {
    let Adjustment {
        delta,
        negate,
        context,
    } = adjustment;
    let base = base.unwrap_or_else(|| RenderedExpr::new(origin.default_literal(), orders.atomic));

    if let Some(value) = parse_number(&base.text) {
        let mut folded = value + delta as f64;
        if negate {
            folded = -folded;
        }
        let rank = if folded < 0.0 {
            orders.unary_negation
        } else {
            orders.atomic
        };
        return RenderedExpr::new(format_number(folded), rank);
    }

    let mut text = base.text;
    let mut rank = None;
    match delta.cmp(&0) {
        Ordering::Greater => {
            text = format!("{text} + {delta}");
            rank = Some(orders.addition);
        }
        Ordering::Less => {
            text = format!("{text} - {}", delta.unsigned_abs());
            rank = Some(orders.subtraction);
        }
        Ordering::Equal => {}
    }
    if negate {
        text = if delta != 0 {
            format!("-({text})")
        } else {
            format!("-{text}")
        };
        rank = Some(orders.unary_negation);
    }

    match rank {
        Some(rank) if rank.cmp_major(context) != Ordering::Less => {
            RenderedExpr::new(format!("({text})"), orders.atomic)
        }
        Some(rank) => RenderedExpr::new(text, rank),
        None => RenderedExpr::new(text, base.rank),
    }
}
