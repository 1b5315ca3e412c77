//! Operator precedence ranks and the parenthesis-elision rule.
//!
//! Every rendered expression carries the [`Precedence`] of its outermost
//! operator. When a consumer embeds it, the consumer states the precedence
//! of the context it is embedding into, and the [`OrderTable`] decides
//! whether the child text must be wrapped in parentheses.
//!
//! Lower ranks bind tighter. The atomic rank is the lowest value of a
//! table and the "none" rank is the highest.

use std::cmp::Ordering;
use std::fmt;

/// A binding-strength rank.
///
/// Ranks order lexicographically by `(major, minor)`. The minor component
/// distinguishes operators that share a tier, such as `*` and `/`, or the
/// prefix increment and prefix negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence {
    major: u8,
    minor: u8,
}

impl Precedence {
    /// Create a rank from its tier and sub-rank.
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Create a rank with no sub-rank.
    pub const fn tier(major: u8) -> Self {
        Self { major, minor: 0 }
    }

    pub const fn major(self) -> u8 {
        self.major
    }

    pub const fn minor(self) -> u8 {
        self.minor
    }

    /// Compare tiers only, ignoring the sub-rank.
    pub fn cmp_major(self, other: Precedence) -> Ordering {
        self.major.cmp(&other.major)
    }

    /// Whether this rank sits in a strictly tighter tier than `other`.
    ///
    /// Operators sharing a tier never bind tighter than each other, so
    /// `a - (b + c)` keeps its parentheses.
    pub fn binds_tighter_than(self, other: Precedence) -> bool {
        self.cmp_major(other) == Ordering::Less
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

/// An unordered pair of ranks for which parentheses are omitted even though
/// the generic rule would require them.
///
/// Each pair encodes a target-language associativity fact, such as
/// `a * (b * c)` being safe to print as `a * b * c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElisionPair(pub Precedence, pub Precedence);

impl ElisionPair {
    /// Whether this pair covers the given ranks, in either order.
    pub fn matches(&self, a: Precedence, b: Precedence) -> bool {
        (self.0 == a && self.1 == b) || (self.0 == b && self.1 == a)
    }
}

/// The precedence table of a target dialect.
///
/// Only the ranks the core needs by role are named here; dialects keep the
/// rest as their own constants. `named` lists every rank for display.
#[derive(Debug, Clone, Copy)]
pub struct OrderTable {
    pub atomic: Precedence,
    pub addition: Precedence,
    pub subtraction: Precedence,
    pub unary_negation: Precedence,
    pub overrides: &'static [ElisionPair],
    pub named: &'static [(&'static str, Precedence)],
}

impl OrderTable {
    /// Whether `(outer, inner)` is on the elision whitelist.
    pub fn is_elided(&self, outer: Precedence, inner: Precedence) -> bool {
        self.overrides.iter().any(|pair| pair.matches(outer, inner))
    }

    /// Whether a child of rank `inner` embedded at `outer` must be
    /// parenthesised.
    ///
    /// Parentheses are required when the child's tier is not strictly
    /// tighter than its context's tier, unless the pair is whitelisted.
    /// Atomic children never need them.
    pub fn needs_parens(&self, outer: Precedence, inner: Precedence) -> bool {
        if inner == self.atomic || self.is_elided(outer, inner) {
            return false;
        }
        !inner.binds_tighter_than(outer)
    }

    /// Embed a rendered child at `outer`, wrapping it when required.
    ///
    /// A wrapped child is atomic from the consumer's point of view.
    pub fn embed(&self, child: RenderedExpr, outer: Precedence) -> RenderedExpr {
        if self.needs_parens(outer, child.rank) {
            RenderedExpr::new(format!("({})", child.text), self.atomic)
        } else {
            child
        }
    }

    /// Look up a rank by its display name.
    pub fn by_name(&self, name: &str) -> Option<Precedence> {
        self.named
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, p)| *p)
    }
}

/// Rendered expression text together with the rank of its outermost
/// operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExpr {
    pub text: String,
    pub rank: Precedence,
}

impl RenderedExpr {
    pub fn new(text: impl Into<String>, rank: Precedence) -> Self {
        Self {
            text: text.into(),
            rank,
        }
    }
}

impl fmt::Display for RenderedExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
