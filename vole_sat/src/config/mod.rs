//! Configuration of a context.
//!
//! The core solver is deliberately knob-free: propagation, analysis, and backjumping have no
//! tunable parameters, and the decision heuristic is pinned.
//! What remains is the one genuine parameter the data model admits --- the phase given to a
//! fresh atom, read back by the decision heuristic until the atom is first assigned.

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The phase recorded for a fresh atom.
    ///
    /// An atom's phase is overwritten on each assignment and retained when the assignment is
    /// undone, so this value decides the polarity of a decision only until the atom has been
    /// valued for the first time.
    pub default_phase: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_phase: false,
        }
    }
}
