//! Scenarios which pin down conflict analysis and what follows it.
//!
//! The decision heuristic is deterministic (least free atom, at its stored phase, false to
//! begin with), so each solve below follows a known script.

use vole_sat::{reports::Report, structures::literal::CLiteral};

use vole_tests::{check_model, solved_context};

mod learnt_clauses {
    use super::*;

    /// Decisions -1 and -2 force a conflict between 1 ∨ 2 ∨ 3 and 1 ∨ 2 ∨ -3.
    /// Analysis resolves the pair to the asserting clause 2 ∨ 1, which is stored; the backjump
    /// re-values atom 2 at level one.
    #[test]
    fn asserting_clause_stored_and_asserted() {
        let cnf = [vec![1, 2, 3], vec![1, 2, -3]];
        let the_context = solved_context(&cnf);

        assert_eq!(the_context.report(), Report::Satisfiable);
        assert!(check_model(&cnf, &the_context));

        assert_eq!(the_context.counters.total_conflicts, 1);
        assert_eq!(the_context.clause_db.addition_count(), 1);

        let addition = the_context
            .clause_db
            .all_additions()
            .next()
            .expect("An addition");

        // The asserting literal leads the clause, and exactly one other literal remains.
        assert_eq!(addition.size(), 2);
        assert_eq!(addition.literal(0), CLiteral::new(1, true));
        assert!(addition.literal_slice().contains(&CLiteral::new(0, true)));

        // The decisions stand, and the assertion was made.
        assert_eq!(the_context.value_of(0), Some(false));
        assert_eq!(the_context.value_of(1), Some(true));
    }

    /// The decision -1 propagates 2 and 3, which conflict on -2 ∨ -3.
    /// Analysis walks both reasons back to the decision: the learnt clause is the unit 1,
    /// recorded as a fact at level zero rather than stored.
    #[test]
    fn unit_learnt_becomes_top_level_fact() {
        let cnf = [vec![1, 2], vec![1, 3], vec![-2, -3]];
        let the_context = solved_context(&cnf);

        assert_eq!(the_context.report(), Report::Satisfiable);
        assert!(check_model(&cnf, &the_context));

        assert_eq!(the_context.counters.total_conflicts, 1);
        assert_eq!(the_context.clause_db.addition_count(), 0);

        assert_eq!(the_context.value_of(0), Some(true));
        assert_eq!(the_context.atom_db.level_of(0), Some(0));
        assert_eq!(the_context.atom_db.reason_of(0), None);
    }

    /// The phase of an atom survives a backjump: atom 3 is valued true by propagation at level
    /// two, unvalued by the backjump, and re-valued true by the next decision.
    #[test]
    fn phase_survives_backjump() {
        let cnf = [vec![1, 2, 3], vec![1, 2, -3]];
        let the_context = solved_context(&cnf);

        assert_eq!(the_context.value_of(2), Some(true));
    }
}

mod reasons {
    use super::*;

    /// A propagated literal leads its reason clause, and every other literal of the reason is
    /// false.
    #[test]
    fn reasons_lead_with_their_assertion() {
        let cnf = [vec![1, 2, 3], vec![1, 2, -3], vec![-1, 4], vec![5, 2]];
        let the_context = solved_context(&cnf);
        assert_eq!(the_context.report(), Report::Satisfiable);

        for atom in 0..the_context.atom_count() as u32 {
            let Some(key) = the_context.atom_db.reason_of(atom) else {
                continue;
            };

            let reason = the_context.clause_db.get(&key).expect("A stored reason");
            let asserted = reason.literal(0);

            assert_eq!(asserted.atom(), atom);
            assert_eq!(the_context.value_of(atom), Some(asserted.polarity()));

            for position in 1..reason.size() {
                let other = reason.literal(position);
                assert_eq!(
                    the_context.value_of(other.atom()),
                    Some(!other.polarity())
                );
            }
        }
    }
}
