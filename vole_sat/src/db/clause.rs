/*!
The clause database --- original and addition clauses, stored and addressed by key.

# Overview

Clauses of size two or more are stored in one of two vectors: `originals` for input clauses and
`additions` for clauses learnt by [analysis](crate::procedures::analysis).
A [ClauseKey] pairs the vector with an index.

Unit clauses are never stored.
A unit input clause is consumed directly as a top-level assignment, and a unit learnt clause is
consumed as a top-level assignment after backjumping (see
[add_clause](crate::context::Context::add_clause) and
[solve](crate::procedures::solve)).

Both stores are append-only.
No reduction of the addition store is performed, so keys --- and in particular reason keys held
in the [atom database](crate::db::atom) --- remain valid for the life of the context.

# Watched positions

After a clause is stored, positions 0 and 1 hold its watched literals, and the clause is present
in the [watch lists](crate::db::watches) of the negations of those positions.
The propagator may swap position 1 with a tail position, and position 0 with position 1.
The set of literals in a clause is invariant under these swaps; the ordering is not, and no
outside observer relies on it.
*/

use crate::{
    db::{watches::Watches, ClauseKey, FormulaIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err::{self},
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// From the input formula.
    Original,

    /// Derived by resolution during conflict analysis.
    Resolution,
}

/// A stored clause, together with its key.
#[allow(non_camel_case_types)]
pub struct dbClause {
    key: ClauseKey,
    literals: CClause,
}

impl dbClause {
    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// The literal at `position`.
    pub fn literal(&self, position: usize) -> CLiteral {
        self.literals[position]
    }

    /// The literals of the clause, as a slice.
    pub fn literal_slice(&self) -> &[CLiteral] {
        &self.literals
    }

    /// Swaps the literals at two positions.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.literals.swap(a, b);
    }
}

impl std::fmt::Display for dbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.literals.as_dimacs(false))
    }
}

/// The clause stores of a context.
#[derive(Default)]
pub struct ClauseDB {
    /// Clauses of the input formula.
    originals: Vec<dbClause>,

    /// Clauses added by conflict analysis.
    additions: Vec<dbClause>,
}

impl ClauseDB {
    /// Stores a clause of size two or more and sets its watches.
    ///
    /// The clause is appended to the store matching `source`, and noted in the watch lists of
    /// the negations of its first two positions.
    pub fn store(
        &mut self,
        literals: CClause,
        source: ClauseSource,
        watches: &mut Watches,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        debug_assert!(literals.len() >= 2);

        let store = match source {
            ClauseSource::Original => &mut self.originals,
            ClauseSource::Resolution => &mut self.additions,
        };

        if store.len() > FormulaIndex::MAX as usize {
            return Err(err::ClauseDBError::StorageExhausted);
        }

        let key = match source {
            ClauseSource::Original => ClauseKey::Original(store.len() as FormulaIndex),
            ClauseSource::Resolution => ClauseKey::Addition(store.len() as FormulaIndex),
        };

        watches.note_watch(literals[0], key);
        watches.note_watch(literals[1], key);

        log::trace!(target: targets::CLAUSE_DB, "Stored {key}: {}", literals.as_dimacs(false));
        store.push(dbClause { key, literals });

        Ok(key)
    }

    /// The clause stored at `key`.
    pub fn get(&self, key: &ClauseKey) -> Result<&dbClause, err::ClauseDBError> {
        let stored = match key {
            ClauseKey::Original(index) => self.originals.get(*index as usize),
            ClauseKey::Addition(index) => self.additions.get(*index as usize),
        };
        stored.ok_or(err::ClauseDBError::Missing)
    }

    /// A mutable borrow of the clause stored at `key`.
    pub(crate) fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut dbClause, err::ClauseDBError> {
        let stored = match key {
            ClauseKey::Original(index) => self.originals.get_mut(*index as usize),
            ClauseKey::Addition(index) => self.additions.get_mut(*index as usize),
        };
        stored.ok_or(err::ClauseDBError::Missing)
    }

    /// A count of stored original clauses.
    pub fn original_count(&self) -> usize {
        self.originals.len()
    }

    /// A count of stored addition clauses.
    pub fn addition_count(&self) -> usize {
        self.additions.len()
    }

    /// An iterator over every stored clause, originals first.
    pub fn all_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.originals.iter().chain(self.additions.iter())
    }

    /// An iterator over stored addition clauses.
    pub fn all_additions(&self) -> impl Iterator<Item = &dbClause> {
        self.additions.iter()
    }
}
