/*!
Watch lists --- for each literal, the clauses to examine when the literal becomes true.

# Overview

A stored clause keeps its two *watched* literals at positions 0 and 1.
The clause appears in the watch list of a literal 𝓁 exactly when ¬𝓁 is one of its watched
literals.

So, the list for 𝓁 is exactly the set of clauses which may have become unit (or unsatisfiable)
when 𝓁 is assigned true: one of their watched literals has just gone false.
[bcp](crate::procedures::bcp) scans the list of each newly-true literal, moving or keeping
watches to re-establish the invariant.

# Implementation

Lists are indexed by the [dense encoding](crate::structures::literal) of the literal, two per
atom.
Removal during propagation is by swap with the last element and truncation: order within a list
carries no meaning, and compaction avoids shifting.
*/

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// The watch lists of every literal in a context.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// Grows the lists to cover at least `count` atoms.
    pub(crate) fn ensure_atoms(&mut self, count: usize) {
        while self.lists.len() < 2 * count {
            self.lists.push(Vec::default());
        }
    }

    /// Notes that `watched` is a watched literal of the clause at `key`.
    ///
    /// That is, appends `key` to the list of ¬`watched`.
    pub(crate) fn note_watch(&mut self, watched: CLiteral, key: ClauseKey) {
        self.lists[watched.negate().index()].push(key);
    }

    /// The clauses watching for `literal` to become true.
    pub fn watchers_of(&self, literal: CLiteral) -> &[ClauseKey] {
        &self.lists[literal.index()]
    }

    // Index-based access, used by bcp to avoid holding a borrow across list mutation.

    pub(crate) fn length_of(&self, list: usize) -> usize {
        self.lists[list].len()
    }

    pub(crate) fn key_at(&self, list: usize, position: usize) -> ClauseKey {
        self.lists[list][position]
    }

    pub(crate) fn swap_remove(&mut self, list: usize, position: usize) {
        self.lists[list].swap_remove(position);
    }
}
