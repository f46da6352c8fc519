/*!
Tools for building a formula in a context.

# Basic methods

The library has two basic methods for building a formula:
- [fresh_atom](crate::context::Context::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::Context::add_clause), to add a clause.

In rough strokes, the pattern is to obtain atoms, bundle literals over those atoms into a
[CClause](crate::structures::clause::CClause), and add the clause to the context.
Atoms mentioned by a clause are created on demand, so a formula may also be added without
touching the atom methods --- as [read_dimacs](crate::context::Context::read_dimacs) does.

# Unit clauses

A unit clause never becomes a stored clause.
Its literal is queued directly as a top-level assignment:
- A literal already true at the top level is a repeat, and nothing changes.
- A literal already false at the top level witnesses that the formula is unsatisfiable.
  The context records this and [BuildError::Unsatisfiable](crate::types::err::BuildError) is
  returned; a subsequent [solve](crate::procedures::solve) reports without search.
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{Context, ContextState},
    db::clause::ClauseSource,
    misc::log::targets::{self},
    structures::{atom::Atom, clause::CClause},
    types::err::{self},
};

/// Ok results when adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a unit clause whose literal already held at the top level.
    Repeat,
}

impl Context {
    /// Adds a fresh atom to the context and returns it.
    pub fn fresh_atom(&mut self) -> Atom {
        let atom = self.atom_db.fresh_atom();
        self.watches.ensure_atoms(self.atom_db.count());
        atom
    }

    /// Grows the context to contain at least `count` atoms.
    pub fn ensure_atoms(&mut self, count: usize) {
        self.atom_db.ensure_count(count);
        self.watches.ensure_atoms(count);
    }

    /// Adds a clause to the context, growing the atom universe to cover its literals.
    ///
    /// Clauses must be added before a solve; an empty clause is rejected.
    ///
    /// For the treatment of unit clauses, see [builder](crate::builder).
    pub fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, err::ErrorKind> {
        for literal in &clause {
            self.ensure_atoms(literal.atom() as usize + 1);
        }

        match clause.len() {
            0 => Err(err::ErrorKind::from(err::ClauseDBError::EmptyClause)),

            1 => {
                let literal = clause[0];
                debug_assert_eq!(self.decision_level(), 0);

                match self.atom_db.value_of_literal(literal) {
                    None => {
                        self.enqueue(literal, None);
                        self.note_input();

                        Ok(ClauseOk::Added)
                    }

                    Some(true) => Ok(ClauseOk::Repeat),

                    Some(false) => {
                        log::trace!(target: targets::CLAUSE_DB, "Unit clause {literal} conflicts with the top level");
                        self.state = ContextState::Unsatisfiable;

                        Err(err::ErrorKind::from(err::BuildError::Unsatisfiable))
                    }
                }
            }

            _ => {
                self.clause_db
                    .store(clause, ClauseSource::Original, &mut self.watches)?;
                self.note_input();

                Ok(ClauseOk::Added)
            }
        }
    }

    fn note_input(&mut self) {
        match self.state {
            ContextState::Unsatisfiable => {}
            _ => self.state = ContextState::Input,
        }
    }
}
