//! Atoms, aka. boolean variables.
//!
//! Atoms are identified by non-negative integer indices, dense from zero.
//! The count of atoms in a context grows monotonically as clauses mentioning fresh atoms are
//! added.

/// The representation of an atom.
///
/// As the literal encoding packs an atom and a polarity into the same width, at most
/// 2³¹ atoms are representable.
pub type Atom = u32;
