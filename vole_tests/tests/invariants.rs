//! Structural invariants of the databases, checked over driven solves.

use vole_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
};

use vole_tests::{context_with, solved_context};

/// A level is recorded for an atom exactly when the atom is on the trail.
fn check_levels_match_trail(the_context: &Context) {
    for atom in 0..the_context.atom_count() as u32 {
        let on_trail = the_context
            .trail
            .literals
            .iter()
            .any(|literal| literal.atom() == atom);

        assert_eq!(the_context.atom_db.level_of(atom).is_some(), on_trail);
    }
}

/// Every stored clause is in exactly two watch lists, those of the negations of its first two
/// positions.
fn check_watch_lists(the_context: &Context) {
    for clause in the_context.clause_db.all_clauses() {
        let key = clause.key();
        let watch_a = clause.literal(0);
        let watch_b = clause.literal(1);

        let mut noted = 0;
        for atom in 0..the_context.atom_count() as u32 {
            for polarity in [true, false] {
                let literal = CLiteral::new(atom, polarity);
                let occurrences = the_context
                    .watches
                    .watchers_of(literal)
                    .iter()
                    .filter(|k| **k == key)
                    .count();

                noted += occurrences;

                let expected = [watch_a.negate(), watch_b.negate()]
                    .iter()
                    .filter(|l| **l == literal)
                    .count();
                assert_eq!(occurrences, expected);
            }
        }

        assert_eq!(noted, 2);
    }
}

mod watch_lists {
    use super::*;

    #[test]
    fn paired_on_attachment() {
        let the_context = context_with(&[vec![1, 2, 3], vec![-1, 2], vec![-2, 3, -4, 5]]);
        check_watch_lists(&the_context);
    }

    #[test]
    fn paired_after_a_solve() {
        let cnf = [
            vec![1, 2, 3],
            vec![1, 2, -3],
            vec![-1, 4],
            vec![-2, -4, 5],
            vec![-5, 1],
        ];
        let the_context = solved_context(&cnf);

        check_watch_lists(&the_context);
        check_levels_match_trail(&the_context);
    }
}

mod backjumps {
    use super::*;

    #[test]
    fn pops_to_the_target_level_and_resets_the_cursor() {
        // Three binary clauses, each propagating its second literal from a decision.
        let mut the_context = context_with(&[vec![1, 2], vec![3, 4], vec![5, 6]]);

        for decision in [0, 2, 4] {
            the_context.new_decision(CLiteral::new(decision, false));
            assert!(the_context.propagate().is_ok());
        }

        assert_eq!(the_context.trail.len(), 6);
        assert_eq!(the_context.decision_level(), 3);
        check_levels_match_trail(&the_context);

        the_context.backjump(1);

        // Exactly the level-one assignments survive, in order.
        assert_eq!(
            the_context.trail.literals,
            vec![CLiteral::new(0, false), CLiteral::new(1, true)]
        );
        assert_eq!(the_context.decision_level(), 1);
        assert_eq!(the_context.trail.q_head, the_context.trail.len());
        check_levels_match_trail(&the_context);

        // Values are gone, phases retained.
        assert_eq!(the_context.value_of(2), None);
        assert!(!the_context.atom_db.phase_of(2));
        assert!(the_context.atom_db.phase_of(3));
    }

    #[test]
    fn backjump_to_the_current_level_is_noop() {
        let mut the_context = context_with(&[vec![1, 2]]);
        the_context.new_decision(CLiteral::new(0, false));
        assert!(the_context.propagate().is_ok());

        the_context.backjump(1);
        assert_eq!(the_context.trail.len(), 2);
        assert_eq!(the_context.decision_level(), 1);
    }
}

mod valuations {
    use super::*;

    #[test]
    fn valuation_string_is_dimacs() {
        let the_context = solved_context(&[vec![1], vec![-2]]);

        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.valuation_string(), "1 -2");
    }

    #[test]
    fn with_atoms_fixes_a_universe() {
        let the_context = Context::with_atoms(4, Config::default());
        assert_eq!(the_context.atom_count(), 4);

        for atom in 0..4 {
            assert_eq!(the_context.value_of(atom), None);
        }
    }
}
