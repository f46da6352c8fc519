//! Procedures which, together, implement the conflict-driven clause-learning algorithm.
//!
//! Each procedure is a collection of [context](crate::context::Context) methods, kept to a file:
//!
//! - [bcp] --- boolean constraint propagation over the two-watched-literal scheme.
//! - [analysis] --- derivation of an asserting clause from a conflict.
//! - [backjump] --- recovery from a conflict by undoing levels of assignments.
//! - [decision] --- the choice of an unvalued atom, and of its value.
//! - [solve] --- the loop tying the above together.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
