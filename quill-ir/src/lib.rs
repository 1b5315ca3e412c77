//! Program tree types for the quill code-synthesis engine.
//!
//! This crate defines the structural program representation that the
//! engine renders. A program is a list of top-level [`Node`] chains; each
//! node carries exactly one [`Construct`], an optional attached comment and
//! an optional following sibling.
//!
//! # Architecture
//!
//! ```text
//! program.json → quill-ir (tree) → quill-codegen (session, precedence) → dialect handlers → source
//! ```
//!
//! The construct set is a closed enum: every target's handler catalog is a
//! single exhaustive `match`, so adding a construct is a compile error until
//! each target handles it.

mod construct;
mod node;
mod ops;
mod program;

pub use construct::{Construct, IfBranch};
pub use node::{Child, Node};
pub use ops::{
    ArithmeticOp, CompareOp, Flow, ListMode, LogicOp, LoopMode, MathConstant, Position, SearchEnd,
    SetMode, SingleOp,
};
pub use program::{Program, Variable};
