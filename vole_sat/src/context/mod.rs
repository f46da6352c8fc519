//! The context --- to which formulas are added and within which solves take place.
//!
//! # Example
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
//! assert!(the_context.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]).is_ok());
//! assert!(the_context.add_clause(vec![CLiteral::new(p, false)]).is_ok());
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Satisfiable);
//! assert_eq!(the_context.value_of(q), Some(true));
//! ```

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches, ClauseKey, LevelIndex},
    misc::log::targets::{self},
    reports::Report,
    structures::{atom::Atom, literal::CLiteral},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No clause has been added.
    Configuration,

    /// Clauses have been added, and their consistency is undetermined.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is known to be satisfiable, e.g. by a complete valuation.
    Satisfiable,

    /// The formula is known to be unsatisfiable, e.g. by a conflict at the top level.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context: a collection of databases pinned together by shared invariants, within which a
/// solve takes place.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The watch lists.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: Watches,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            counters: Counters::default(),

            atom_db: AtomDB::new(config.default_phase),
            clause_db: ClauseDB::default(),
            watches: Watches::default(),
            trail: Trail::default(),

            state: ContextState::Configuration,

            config,
        }
    }

    /// Creates a context with an initial universe of `count` atoms.
    ///
    /// Further atoms may be introduced by added clauses.
    pub fn with_atoms(count: usize, config: Config) -> Self {
        let mut context = Self::from_config(config);
        context.ensure_atoms(count);
        context
    }

    /// A report on the satisfiability of the formula in the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Report::Unknown
            }
        }
    }

    /// A count of atoms in the context.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// The value of an atom on the current valuation, if any.
    ///
    /// After a [Satisfiable](Report::Satisfiable) report every atom has a value, and together
    /// the values satisfy every added clause.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The DIMACS representation of the current valuation.
    pub fn valuation_string(&self) -> String {
        self.atom_db.valuation_string()
    }

    /// The current decision level: the level of the assignment at the tail of the trail, or
    /// zero if the trail is empty.
    pub fn decision_level(&self) -> LevelIndex {
        match self.trail.tail() {
            None => 0,
            Some(literal) => match self.atom_db.level_of(literal.atom()) {
                Some(level) => level,
                None => panic!("! A trailed literal without a level"),
            },
        }
    }

    /// Records `literal` at the current decision level with the given reason, and queues the
    /// assignment for propagation.
    ///
    /// The atom of the literal must not already have a value.
    ///
    /// The reason, if any, must be a stored clause which is unit on the valuation prior to the
    /// assignment, with `literal` at its first position.
    pub(crate) fn enqueue(&mut self, literal: CLiteral, reason: Option<ClauseKey>) {
        let level = self.decision_level();
        log::trace!(target: targets::QUEUE, "Queued {literal} at level {level}");
        self.atom_db.assign(literal, level, reason);
        self.trail.push(literal);
    }

    /// Opens a fresh decision level with `literal` as its decision.
    ///
    /// The level is incremented first, and the literal recorded at the incremented level: the
    /// decision bounds every propagation made before the next decision.
    ///
    /// The atom of the literal must not already have a value.
    pub fn new_decision(&mut self, literal: CLiteral) {
        let level = self.decision_level() + 1;
        log::trace!(target: targets::QUEUE, "Decision {literal} opens level {level}");
        self.atom_db.assign(literal, level, None);
        self.trail.push(literal);
    }
}
