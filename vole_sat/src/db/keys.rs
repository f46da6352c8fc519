/// The index to a clause within a store.
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in indexed vectors, and a key pairs the index
/// with the vector it belongs to.
///
/// As no clause is ever removed from the database, an index is never reused, and a key remains
/// valid for the life of the context.
/// Reason keys held in the [atom database](crate::db::atom) rely on exactly this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to an original clause.
    Original(FormulaIndex),

    /// The key to a clause added by conflict analysis.
    Addition(FormulaIndex),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Original(index) => *index as usize,
            Self::Addition(index) => *index as usize,
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Original(key) => write!(f, "Original({key})"),
            Self::Addition(key) => write!(f, "Addition({key})"),
        }
    }
}
