/*!
Boolean constraint propagation, over the two-watched-literal scheme.

# Overview

Propagation consumes the [trail](crate::db::trail) from the cursor forward.
For each assignment, read as a true literal 𝓁, the [watch list](crate::db::watches) of 𝓁 is
scanned: every clause on the list has ¬𝓁 at a watched position, and ¬𝓁 has just gone false.

For each such clause, in order:

1. The clause is normalised so the false watch is at position 1.
2. If the literal at position 0 is true the clause is satisfied, and the watch is kept.
3. Otherwise the tail of the clause (positions two and up) is scanned for a literal which is
   not false.
   If one is found it is swapped into position 1 and the clause moves to the watch list of the
   negation of its new watch.
4. If no such literal exists, every literal other than position 0 is false:
   - If position 0 is also false the clause is unsatisfiable on the valuation, and propagation
     concludes with the conflict.
   - Otherwise the clause asserts position 0, which is queued with the clause as its reason.

Removal from a watch list is by swap with the last element.
As this overwrites the current slot with an unexamined clause, the scan does *not* advance after
a removal --- see the loop for details.

# Example

bcp is a mutating method, and a typical application will match against the result of the
mutation.
For example, a conflict may lead to conflict analysis, and no conflict to a decision being made.

```rust,ignore
match self.propagate() {
    Err(err::BCPError::Conflict(key)) => {
        if self.decision_level() == 0 {
            ...
        }
        let (learnt, target) = self.analyze(key)?;
        ...
    }
    ...
}
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    types::err::{self},
};

impl Context {
    /// Propagates every queued assignment, advancing the cursor to the end of the trail.
    ///
    /// Returns the key of a conflicting clause as an `Err`, if some clause became unsatisfiable
    /// on the valuation.
    /// Otherwise, on a return of `Ok` every stored clause is either satisfied or watches two
    /// literals which are not false.
    ///
    /// For details, see [procedures::bcp](crate::procedures::bcp).
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        'trail_loop: while let Some(literal) = self.trail.take_unpropagated() {
            self.counters.total_propagations += 1;
            log::trace!(target: targets::PROPAGATION, "Propagating {literal}");

            let negated = literal.negate();
            let list = literal.index();

            let mut position = 0;
            'watch_loop: while position < self.watches.length_of(list) {
                let key = self.watches.key_at(list, position);

                let clause = match self.clause_db.get_mut(&key) {
                    Ok(clause) => clause,
                    Err(_) => {
                        log::error!(target: targets::PROPAGATION, "Watched clause {key} is missing");
                        return Err(err::BCPError::CorruptWatch);
                    }
                };

                // Make sure the false watch is at position 1.
                if clause.literal(0) == negated {
                    clause.swap(0, 1);
                }
                debug_assert_eq!(clause.literal(1), negated);

                let first = clause.literal(0);
                let first_value = self.atom_db.value_of_literal(first);

                // Already satisfied; the watch is kept.
                if first_value == Some(true) {
                    position += 1;
                    continue 'watch_loop;
                }

                // Search the tail for a new literal to watch in place of position 1.
                for candidate_position in 2..clause.size() {
                    let candidate = clause.literal(candidate_position);

                    if self.atom_db.value_of_literal(candidate) != Some(false) {
                        clause.swap(1, candidate_position);

                        // The swap-remove overwrites the current slot with the (unexamined)
                        // last element of the list, so the position is not advanced.
                        self.watches.swap_remove(list, position);
                        self.watches.note_watch(candidate, key);

                        continue 'watch_loop;
                    }
                }

                // No replacement: every literal but the first is false.
                match first_value {
                    // A true first was dispatched before the tail scan, so the value is false.
                    Some(_) => {
                        log::trace!(target: targets::PROPAGATION, "Conflict from {key}");
                        self.trail.q_head = self.trail.len();

                        return Err(err::BCPError::Conflict(key));
                    }

                    None => {
                        log::trace!(target: targets::PROPAGATION, "Consequence of {key} is {first}");
                        self.enqueue(first, Some(key));

                        position += 1;
                    }
                }
            }
        }

        Ok(())
    }
}
