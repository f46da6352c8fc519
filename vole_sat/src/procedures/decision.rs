/*!
The choice of an atom to value, and of the value to give it.

# Overview

The heuristic is deliberately trivial: the atom without a value of least index, valued at the
phase byte the atom already holds.

As the [atom database](crate::db::atom) retains the phase of an atom when an assignment is
undone, reading the byte back amounts to phase saving: an atom which has been valued before is
re-valued as it was, and a fresh atom takes
[Config::default_phase](crate::config::Config::default_phase).

Nothing outside this file depends on how decisions are chosen, so a heuristic upgrade (activity
orderings, random polarities, …) is additive.
*/

use crate::{
    context::Context,
    structures::{atom::Atom, literal::CLiteral},
};

/// Possible results of choosing a truth value to assign.
pub enum DecisionOk {
    /// Some truth value may be assigned to some atom.
    Literal(CLiteral),

    /// Every atom has a value, so no decision can be made.
    Exhausted,
}

impl Context {
    /// Chooses a decision literal: the first atom without a value, at its stored phase.
    ///
    /// The choice is not applied --- for that, see
    /// [new_decision](crate::context::Context::new_decision).
    pub fn make_decision(&mut self) -> DecisionOk {
        match self.atom_without_value() {
            Some(atom) => {
                self.counters.total_decisions += 1;

                let literal = CLiteral::new(atom, self.atom_db.phase_of(atom));
                log::trace!("Decision {literal}");

                DecisionOk::Literal(literal)
            }

            None => DecisionOk::Exhausted,
        }
    }

    /// The least atom which has no value on the current valuation, if any.
    pub fn atom_without_value(&self) -> Option<Atom> {
        (0..self.atom_db.count() as Atom).find(|atom| self.atom_db.value_of(*atom).is_none())
    }
}
