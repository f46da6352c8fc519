use vole_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

use vole_tests::{check_model, clause_from_ints, report_of, solved_context};

mod basic {
    use super::*;

    #[test]
    fn empty_formula_is_satisfiable() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.valuation_string(), "");
    }

    #[test]
    fn one_literal() {
        let the_context = solved_context(&[vec![1]]);
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.value_of(0), Some(true));
    }

    #[test]
    fn conflicting_units() {
        assert_eq!(report_of(&[vec![1], vec![-1]]), Report::Unsatisfiable);
    }

    #[test]
    fn binary_square() {
        let cnf = [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
        assert_eq!(report_of(&cnf), Report::Unsatisfiable);
    }

    #[test]
    fn implication_chain() {
        let cnf = [vec![1, 2, 3], vec![-1, 2], vec![-2, 3]];
        let the_context = solved_context(&cnf);

        assert_eq!(the_context.report(), Report::Satisfiable);
        assert!(check_model(&cnf, &the_context));
    }

    #[test]
    fn every_atom_valued_after_sat() {
        let cnf = [vec![1, 2, 3], vec![-1, 2], vec![-2, 3]];
        let the_context = solved_context(&cnf);

        for atom in 0..the_context.atom_count() as u32 {
            assert!(the_context.value_of(atom).is_some());
        }
    }

    #[test]
    fn solve_is_idempotent() {
        let cnf = [vec![1, 2], vec![-1, 2]];
        let mut the_context = solved_context(&cnf);
        let report = the_context.report();

        let iterations = the_context.counters.total_iterations;
        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), report);
        assert_eq!(the_context.counters.total_iterations, iterations);
    }
}

mod odd_input {
    use super::*;

    #[test]
    fn duplicate_literals_tolerated() {
        let cnf = [vec![1, 1, 2], vec![-1, -1, -2], vec![-1, 2, 2]];
        let the_context = solved_context(&cnf);

        assert_eq!(the_context.report(), Report::Satisfiable);
        assert!(check_model(&cnf, &the_context));
    }

    #[test]
    fn tautology_tolerated() {
        let cnf = [vec![1, -1], vec![2, -2, 1]];
        let the_context = solved_context(&cnf);

        assert_eq!(the_context.report(), Report::Satisfiable);
        assert!(check_model(&cnf, &the_context));
    }

    #[test]
    fn repeat_unit_is_noted() {
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(
            the_context.add_clause(clause_from_ints(&[3])),
            Ok(ClauseOk::Added)
        );
        assert_eq!(
            the_context.add_clause(clause_from_ints(&[3])),
            Ok(ClauseOk::Repeat)
        );
    }

    #[test]
    fn empty_clause_rejected() {
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(
            the_context.add_clause(vec![]),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause))
        );
    }

    #[test]
    fn conflicting_unit_identified_on_addition() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.add_clause(clause_from_ints(&[2])).is_ok());
        assert_eq!(
            the_context.add_clause(clause_from_ints(&[-2])),
            Err(ErrorKind::Build(err::BuildError::Unsatisfiable))
        );

        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), Report::Unsatisfiable);
    }

    #[test]
    fn atoms_grow_with_clauses() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.atom_count(), 0);

        assert!(the_context.add_clause(clause_from_ints(&[1, -7])).is_ok());
        assert_eq!(the_context.atom_count(), 7);
    }
}

mod phases {
    use super::*;

    #[test]
    fn default_phase_decides_free_atoms() {
        for phase in [true, false] {
            let config = Config {
                default_phase: phase,
            };
            let mut the_context = Context::from_config(config);
            let p = the_context.fresh_atom();

            assert!(the_context
                .add_clause(vec![CLiteral::new(p, true), CLiteral::new(p, false)])
                .is_ok());
            assert!(the_context.solve().is_ok());

            assert_eq!(the_context.report(), Report::Satisfiable);
            assert_eq!(the_context.value_of(p), Some(phase));
        }
    }
}
