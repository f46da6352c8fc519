/*!
Determines the satisfiability of the formula in a context.

# Overview

Roughly, the loop is as diagrammed:

```none
          +---------------+
  +-------| make_decision |
  |       +---------------+
  |               ⌃
  |               |
  |               | no conflict, and some atom has no value
  |               |
  |               |            +-----> satisfiable, if every atom has a value
  ⌄       +-------------+      |
--+------>|  propagate  |------+
  ⌃       +-------------+      |
  |               |            +-----> unsatisfiable, on a conflict at level zero
  |               |
  |               | a conflict at some decision level
  |               ⌄
  |   +---------------------+
  +---| analyze ∘ backjump  |
      +---------------------+
```

Each conflict above level zero is analysed to an asserting clause.
After the backjump the clause is unit: a clause of size one records a fact at level zero, and a
larger clause is stored, watched, and made the reason of its asserted literal.

# Termination

Every iteration either reduces the set of unvalued atoms, or learns a clause ruling out a
distinct partial valuation.
As clauses accumulate monotonically over a finite atom universe, the loop terminates.
*/

use crate::{
    context::{Context, ContextState},
    db::clause::ClauseSource,
    procedures::decision::DecisionOk,
    reports::Report,
    types::err::{self},
};

impl Context {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// Runs to completion: there is no suspension, and the two terminal reports are final ---
    /// a repeated call returns the recorded report without further search.
    ///
    /// For details, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),

            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                self.state = ContextState::Solving;
            }
        }

        'solve_loop: loop {
            self.counters.total_iterations += 1;
            log::trace!("Iteration {}", self.counters.total_iterations);

            match self.propagate() {
                Err(err::BCPError::Conflict(key)) => {
                    self.counters.total_conflicts += 1;

                    if self.decision_level() == 0 {
                        self.state = ContextState::Unsatisfiable;
                        break 'solve_loop;
                    }

                    let (learnt, target) = self.analyze(key)?;
                    self.backjump(target);

                    let asserted = learnt[0];
                    debug_assert!(self.atom_db.value_of_literal(asserted).is_none());

                    match learnt.len() {
                        1 => {
                            // A fact at level zero; no clause is stored to reason with.
                            self.enqueue(asserted, None);
                        }

                        _ => {
                            let key = self.clause_db.store(
                                learnt,
                                ClauseSource::Resolution,
                                &mut self.watches,
                            )?;
                            self.enqueue(asserted, Some(key));
                        }
                    }
                }

                Err(corrupt) => return Err(err::ErrorKind::from(corrupt)),

                Ok(()) => match self.make_decision() {
                    DecisionOk::Literal(literal) => self.new_decision(literal),

                    DecisionOk::Exhausted => {
                        self.state = ContextState::Satisfiable;
                        break 'solve_loop;
                    }
                },
            }
        }

        Ok(self.report())
    }
}
