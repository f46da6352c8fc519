//! Literals: atoms paired with a polarity.
//!
//! # Representation
//!
//! The canonical literal packs its atom and polarity into a single integer: atom *a* with
//! positive polarity is encoded as `2·a`, and with negative polarity as `2·a + 1`.
//!
//! The encoding has two consequences used throughout the library:
//! - Negation flips the low bit, and so is an involution.
//! - The encoding is dense, and so a literal indexes directly into per-literal structures such
//!   as [watch lists](crate::db::watches) via [index](CLiteral::index).
//!
//! Equality and ordering are over the encoding.

use crate::structures::atom::Atom;

/// The canonical representation of a literal.
///
/// # Example
///
/// ```rust
/// # use vole_sat::structures::literal::CLiteral;
/// let p = CLiteral::new(3, true);
///
/// assert_eq!(p.atom(), 3);
/// assert!(p.polarity());
/// assert_eq!(!p, CLiteral::new(3, false));
/// assert_eq!(!!p, p);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral(u32);

impl CLiteral {
    /// Creates a literal from an atom and a polarity.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        debug_assert!(atom <= Atom::MAX >> 1);
        match polarity {
            true => CLiteral(atom << 1),
            false => CLiteral((atom << 1) | 1),
        }
    }

    /// The literal with the same atom and the opposite polarity.
    pub fn negate(self) -> Self {
        CLiteral(self.0 ^ 1)
    }

    /// The atom of the literal.
    pub fn atom(self) -> Atom {
        self.0 >> 1
    }

    /// The polarity of the literal --- true iff the literal is positive.
    pub fn polarity(self) -> bool {
        self.0 & 1 == 0
    }

    /// The dense index of the literal, for use with per-literal structures.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The DIMACS representation of the literal: the 1-indexed atom, negative iff the literal
    /// is negative.
    pub fn as_int(self) -> i64 {
        let int = self.atom() as i64 + 1;
        match self.polarity() {
            true => int,
            false => -int,
        }
    }
}

impl std::ops::Not for CLiteral {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

impl TryFrom<i64> for CLiteral {
    type Error = ();

    /// From a DIMACS integer: 1-indexed, negative for a negative literal.
    /// Zero and out-of-range values fail.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let magnitude = value.unsigned_abs();
        if magnitude == 0 || magnitude > (Atom::MAX >> 1) as u64 + 1 {
            return Err(());
        }
        Ok(CLiteral::new((magnitude - 1) as Atom, value.is_positive()))
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn encoding() {
        let p = CLiteral::new(0, true);
        let not_p = CLiteral::new(0, false);

        assert_eq!(p.index(), 0);
        assert_eq!(not_p.index(), 1);
        assert_eq!(CLiteral::new(2, true).index(), 4);

        assert_eq!(p.negate(), not_p);
        assert_eq!(not_p.negate(), p);
        assert_eq!(!!p, p);
    }

    #[test]
    fn ordering() {
        assert!(CLiteral::new(0, true) < CLiteral::new(0, false));
        assert!(CLiteral::new(0, false) < CLiteral::new(1, true));
    }

    #[test]
    fn dimacs_ints() {
        assert_eq!(CLiteral::try_from(-3), Ok(CLiteral::new(2, false)));
        assert_eq!(CLiteral::new(2, false).as_int(), -3);
        assert_eq!(CLiteral::try_from(0), Err(()));
    }
}
