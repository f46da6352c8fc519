/*!
Recovery from a conflict.

# Overview

A backjump is a jump from some decision level to some previous decision level.

Typically, a backjump is made from level *l* to level *l − i* because a conflict was found at
level *l* and [analysis](crate::procedures::analysis) produced a clause which asserts some
literal at level *l − i*, skipping the levels in between.

Every assignment made at a level above the target is undone, in reverse trail order: the level
and reason of the atom are cleared, while the phase byte is retained for the
[decision procedure](crate::procedures::decision) to read back.

On conclusion the propagation cursor rests at the end of the shortened trail: each surviving
assignment has already been propagated, and anything queued afterwards is gone.
*/

use crate::{
    context::Context,
    db::LevelIndex,
    misc::log::targets::{self},
};

impl Context {
    /// Backjumps to the given target level.
    ///
    /// Assignments at levels above the target are undone; the target level and everything
    /// below it survive.
    /// Passing a target at or above the current level is safe --- nothing happens.
    ///
    /// For details, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.decision_level());

        while let Some(literal) = self.trail.tail() {
            match self.atom_db.level_of(literal.atom()) {
                Some(level) if level > target => {
                    self.atom_db.drop_value(literal.atom());
                    self.trail.literals.pop();
                }

                Some(_) => break,

                None => panic!("! A trailed literal without a level"),
            }
        }

        self.trail.q_head = self.trail.len();
    }
}
