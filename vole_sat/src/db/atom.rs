/*!
The atom database --- the valuation, together with the level and reason for each assignment.

# Overview

For each atom the database records:
- A *phase*: the boolean the atom held when last assigned.
  The phase is meaningful as part of the valuation only while the atom is assigned, but is
  *retained* when the assignment is undone.
  The retained byte is read back by the [decision procedure](crate::procedures::decision) as the
  polarity of a fresh decision --- a recycled form of phase saving.
- An optional *decision level*: present exactly when the atom is on the
  [trail](crate::db::trail).
  Whether an atom is assigned is determined by the presence of a level, never by the phase.
- An optional *reason*: the key of the clause which became unit and forced the assignment.
  Absent for decisions and for top-level facts.

A reason key is valid only while the corresponding atom remains assigned.
As the clause database never removes a clause, this holds trivially.
*/

use crate::{
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{atom::Atom, literal::CLiteral},
};

/// The assignment details of every atom in a context.
pub struct AtomDB {
    /// The phase of each atom, meaningful while the atom has a level, retained otherwise.
    phases: Vec<bool>,

    /// The decision level of each atom, present iff the atom is on the trail.
    levels: Vec<Option<LevelIndex>>,

    /// The reason clause of each atom, present iff the atom was assigned by propagation from a
    /// stored clause.
    reasons: Vec<Option<ClauseKey>>,

    /// The phase given to a fresh atom, cloned from the configuration.
    default_phase: bool,
}

impl AtomDB {
    pub fn new(default_phase: bool) -> Self {
        AtomDB {
            phases: Vec::default(),
            levels: Vec::default(),
            reasons: Vec::default(),
            default_phase,
        }
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.levels.len()
    }

    /// Adds a fresh atom to the database and returns it.
    pub fn fresh_atom(&mut self) -> Atom {
        let atom = self.levels.len() as Atom;
        self.phases.push(self.default_phase);
        self.levels.push(None);
        self.reasons.push(None);
        atom
    }

    /// Grows the database to contain at least `count` atoms.
    pub fn ensure_count(&mut self, count: usize) {
        while self.levels.len() < count {
            self.fresh_atom();
        }
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        match self.levels[atom as usize] {
            Some(_) => Some(self.phases[atom as usize]),
            None => None,
        }
    }

    /// The value of a literal on the current valuation, if any.
    ///
    /// True iff the atom is assigned the polarity of the literal.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The phase byte of an atom, regardless of whether the atom is assigned.
    pub fn phase_of(&self, atom: Atom) -> bool {
        self.phases[atom as usize]
    }

    /// The decision level of an atom, if assigned.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels[atom as usize]
    }

    /// The reason clause of an atom, if assigned by propagation.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons[atom as usize]
    }

    /// Values the atom of `literal` to match the literal, at the given level, for the given
    /// reason.
    ///
    /// The atom must not already have a value.
    pub(crate) fn assign(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<ClauseKey>) {
        let atom = literal.atom() as usize;
        debug_assert!(self.levels[atom].is_none());

        self.phases[atom] = literal.polarity();
        self.levels[atom] = Some(level);
        self.reasons[atom] = reason;
    }

    /// Drops the value of an atom, retaining the phase.
    pub(crate) fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared atom {atom}");
        self.levels[atom as usize] = None;
        self.reasons[atom as usize] = None;
    }

    /// The DIMACS representation of the current valuation: each assigned atom as a
    /// (1-indexed, signed) integer.
    pub fn valuation_string(&self) -> String {
        (0..self.count() as Atom)
            .filter_map(|atom| {
                self.value_of(atom)
                    .map(|value| CLiteral::new(atom, value).to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
