/*!
Analysis of a conflict, to a clause asserting at the first unique implication point.

# Overview

Analysis takes the key of a clause which is unsatisfiable on the current valuation and derives
a *learnt* clause by resolution on the reason clauses of assignments at the conflicting decision
level.

Resolution stops at the first unique implication point: the latest assignment at the conflict
level which, alone, remains of the resolved clause at that level.
The learnt clause:

- Is a logical consequence of the stored clauses, as each resolution step is on a reason.
- Contains exactly one literal assigned at the conflict level --- the negation of the first
  unique implication point --- placed at position 0.
- Has every other literal assigned at some strictly lower level.

So, after a backjump to the highest level among the remaining literals, the learnt clause
asserts its first literal.

# Implementation

Rather than building each intermediate resolvent, the procedure keeps:

- A set of atoms already *seen*, i.e. merged into the resolvent.
- A count of seen assignments at the conflict level which are still to be resolved on.

Both are seeded from the conflict clause.
The trail is then walked from the tail: each seen assignment either is the unique implication
point (the count reaches zero), or has its reason merged --- fresh atoms from the reason are
marked seen, and appended to the learnt clause or counted, by level.
Walking the trail in reverse guarantees each reason is merged at most once, and that the count
reaches zero at the latest dominating assignment.

Only the conflict level is resolved on, so any assignment visited before the count reaches zero
was made by propagation, and its reason holds the asserted literal at position 0.

# Watches on the learnt clause

Before the clause is returned, the highest-level literal among positions one and up is swapped
to position 1.
Positions 0 and 1 become the watched literals on attachment, and this pair leaves the valuation
together under any later backjump: the asserting literal is re-valued at the backjump level the
highest remaining literal defines.
*/

use std::collections::HashSet;

use crate::{
    context::Context,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err::{self},
};

impl Context {
    /// Derives from a conflicting clause an asserting clause, and the level to backjump to
    /// before the assertion can be made.
    ///
    /// The returned clause holds the asserting literal at position 0 and a highest-level
    /// literal at position 1; the returned level is the highest level among positions one and
    /// up, or zero for a unit clause.
    ///
    /// May be called only when some decision has been made, with a clause false on the current
    /// valuation.
    ///
    /// For details, see [procedures::analysis](crate::procedures::analysis).
    pub fn analyze(&self, conflict: ClauseKey) -> Result<(CClause, LevelIndex), err::ErrorKind> {
        let conflict_level = self.decision_level();
        debug_assert!(conflict_level >= 1);

        log::info!(target: targets::ANALYSIS, "Analysis of {conflict} at level {conflict_level}");

        let mut learnt: CClause = CClause::default();
        let mut seen: HashSet<Atom> = HashSet::default();

        // Seen assignments at the conflict level, not yet resolved on.
        let mut unresolved: usize = 0;

        let conflict_clause = self.clause_db.get(&conflict)?;
        for literal in conflict_clause.literal_slice() {
            debug_assert_eq!(self.atom_db.value_of_literal(*literal), Some(false));

            if !seen.insert(literal.atom()) {
                continue;
            }

            match self.atom_db.level_of(literal.atom()) {
                Some(level) if level < conflict_level => learnt.push(*literal),
                Some(_) => unresolved += 1,
                None => return Err(err::ErrorKind::from(err::AnalysisError::UnvaluedLiteral)),
            }
        }
        debug_assert!(unresolved >= 1);

        let mut asserting: Option<CLiteral> = None;

        'trail_walk: for literal in self.trail.literals.iter().rev() {
            if !seen.contains(&literal.atom()) {
                continue 'trail_walk;
            }

            unresolved -= 1;
            if unresolved == 0 {
                asserting = Some(*literal);
                break 'trail_walk;
            }

            // Not the unique implication point, so made by propagation: resolve on the reason.
            let reason_key = match self.atom_db.reason_of(literal.atom()) {
                Some(key) => key,
                None => return Err(err::ErrorKind::from(err::AnalysisError::NoAssertion)),
            };

            let reason = self.clause_db.get(&reason_key)?;
            debug_assert_eq!(reason.literal(0), *literal);

            for position in 1..reason.size() {
                let resolvent = reason.literal(position);

                if !seen.insert(resolvent.atom()) {
                    continue;
                }

                match self.atom_db.level_of(resolvent.atom()) {
                    Some(level) if level < conflict_level => learnt.push(resolvent),
                    Some(_) => unresolved += 1,
                    None => return Err(err::ErrorKind::from(err::AnalysisError::UnvaluedLiteral)),
                }
            }
        }

        let Some(uip) = asserting else {
            log::error!(target: targets::ANALYSIS, "Trail exhausted without an implication point");
            return Err(err::ErrorKind::from(err::AnalysisError::NoAssertion));
        };

        // The asserting literal, placed at position 0.
        learnt.push(uip.negate());
        let tail = learnt.len() - 1;
        learnt.swap(0, tail);

        // The backjump level, with its defining literal placed at position 1.
        let mut backjump_level = 0;
        if learnt.len() > 1 {
            let mut high_position = 1;

            for position in 1..learnt.len() {
                match self.atom_db.level_of(learnt[position].atom()) {
                    Some(level) if level > backjump_level => {
                        backjump_level = level;
                        high_position = position;
                    }
                    Some(_) => {}
                    None => return Err(err::ErrorKind::Backjump),
                }
            }

            learnt.swap(1, high_position);
        }

        log::info!(target: targets::ANALYSIS, "Learnt {} asserting at level {backjump_level}", learnt.as_dimacs(false));

        Ok((learnt, backjump_level))
    }
}
