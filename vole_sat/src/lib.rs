//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! vole_sat implements the core of a conflict-driven clause-learning solver: the literal and
//! clause data model, two-watched-literal unit propagation, conflict analysis to the first
//! unique implication point, learnt-clause generation, and non-chronological backjumping.
//!
//! The decision heuristic is deliberately trivial --- the first variable without a value, at the
//! polarity the variable last held.
//! This keeps every correctness-critical part of the solver on display, and a heuristic upgrade
//! is additive: nothing in propagation, analysis, or backjumping depends on how decisions are
//! chosen.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::Context).
//!
//! Internally, and at a high level, a solve is viewed in terms of the manipulation of, and
//! relationships between, a handful of databases:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - A valuation, together with the decision level and reason for each assignment, is stored in
//!   an [atom database](crate::db::atom).
//! - The assignments themselves, in the order they were made, are stored on a
//!   [trail](crate::db::trail), consumed by propagation from a cursor.
//! - The clauses interested in an atom taking some value are indexed by
//!   [watch lists](crate::db::watches).
//!
//! Useful starting points may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a
//!   solve.
//! - The [propagator](crate::procedures::bcp) and [analysis](crate::procedures::analysis)
//!   procedures, which do most of the work.
//! - The [structures] to familiarise yourself with the representation of literals and clauses.
//!
//! # Examples
//!
//! Build and solve a formula programmatically:
//!
//! ```rust
//! # use vole_sat::config::Config;
//! # use vole_sat::context::Context;
//! # use vole_sat::reports::Report;
//! # use vole_sat::structures::literal::CLiteral;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_atom();
//! let q = the_context.fresh_atom();
//!
//! let p_or_q = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
//! let not_p = vec![CLiteral::new(p, false)];
//!
//! assert!(the_context.add_clause(p_or_q).is_ok());
//! assert!(the_context.add_clause(not_p).is_ok());
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Satisfiable);
//!
//! assert_eq!(the_context.value_of(p), Some(false));
//! assert_eq!(the_context.value_of(q), Some(true));
//! ```
//!
//! Parse and solve a DIMACS formula:
//!
//! ```rust
//! # use vole_sat::config::Config;
//! # use vole_sat::context::Context;
//! # use vole_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//!  1 -2 0
//! -1 -2 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with a variety of targets defined in
//! [misc::log] to help narrow output to relevant parts of a solve.
//! No log implementation is provided.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/),
//! logs related to propagation can be filtered with `RUST_LOG=propagation …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
