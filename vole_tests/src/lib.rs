//! Helpers for tests of the vole_sat library.
//!
//! Formulas are passed around in the DIMACS convention: clauses as vectors of non-zero
//! integers, variables 1-indexed, negative for negation.

use rand::Rng;

use vole_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

/// A clause from DIMACS-style integers.
pub fn clause_from_ints(ints: &[i64]) -> CClause {
    ints.iter()
        .map(|int| CLiteral::try_from(*int).expect("A non-zero literal"))
        .collect()
}

/// A context holding the given formula.
///
/// A formula found unsatisfiable on its unit clauses alone is still a context, so the
/// unsatisfiable build error is tolerated here.
pub fn context_with(cnf: &[Vec<i64>]) -> Context {
    let mut the_context = Context::from_config(Config::default());

    for ints in cnf {
        match the_context.add_clause(clause_from_ints(ints)) {
            Ok(_) => {}
            Err(err::ErrorKind::Build(err::BuildError::Unsatisfiable)) => {}
            Err(e) => panic!("Failed to add {ints:?}: {e:?}"),
        }
    }

    the_context
}

/// A context holding the given formula, solved.
pub fn solved_context(cnf: &[Vec<i64>]) -> Context {
    let mut the_context = context_with(cnf);
    assert!(the_context.solve().is_ok());
    the_context
}

/// The report from solving the given formula.
pub fn report_of(cnf: &[Vec<i64>]) -> Report {
    solved_context(cnf).report()
}

/// True if the valuation of the context satisfies every clause of the formula.
pub fn check_model(cnf: &[Vec<i64>], the_context: &Context) -> bool {
    cnf.iter().all(|clause| {
        clause.iter().any(|int| {
            let atom = (int.unsigned_abs() - 1) as u32;
            the_context.value_of(atom) == Some(*int > 0)
        })
    })
}

/// Satisfiability of the formula by enumeration of every valuation.
///
/// For use as an oracle on small formulas only.
pub fn brute_force_satisfiable(cnf: &[Vec<i64>], atom_count: usize) -> bool {
    assert!(atom_count <= 20);

    (0..1_u64 << atom_count).any(|valuation| {
        cnf.iter().all(|clause| {
            clause.iter().any(|int| {
                let bit = valuation >> (int.unsigned_abs() - 1) & 1 == 1;
                bit == (*int > 0)
            })
        })
    })
}

/// A uniform random 3-CNF formula: each clause three distinct variables, each negated at
/// random.
pub fn random_3cnf(rng: &mut impl Rng, atom_count: usize, clause_count: usize) -> Vec<Vec<i64>> {
    assert!(atom_count >= 3);

    (0..clause_count)
        .map(|_| {
            let mut atoms: Vec<i64> = Vec::with_capacity(3);
            while atoms.len() < 3 {
                let atom = rng.random_range(1..=atom_count as i64);
                if !atoms.contains(&atom) {
                    atoms.push(atom);
                }
            }

            atoms
                .into_iter()
                .map(|atom| if rng.random_bool(0.5) { atom } else { -atom })
                .collect()
        })
        .collect()
}

/// The pigeonhole principle for the given counts: every pigeon is in some hole, and no hole
/// holds two pigeons.
///
/// Unsatisfiable exactly when there are more pigeons than holes.
pub fn pigeonhole(pigeons: usize, holes: usize) -> Vec<Vec<i64>> {
    let var = |pigeon: usize, hole: usize| (pigeon * holes + hole + 1) as i64;

    let mut cnf = Vec::default();

    for pigeon in 0..pigeons {
        cnf.push((0..holes).map(|hole| var(pigeon, hole)).collect());
    }

    for hole in 0..holes {
        for first in 0..pigeons {
            for second in (first + 1)..pigeons {
                cnf.push(vec![-var(first, hole), -var(second, hole)]);
            }
        }
    }

    cnf
}
