use rand::{rngs::StdRng, SeedableRng};

use vole_sat::reports::Report;
use vole_tests::{brute_force_satisfiable, check_model, random_3cnf, solved_context};

mod three_sat {
    use super::*;

    /// Verdicts agree with an enumeration oracle across the phase transition, and every
    /// satisfiable verdict is witnessed by its model.
    #[test]
    fn agreement_with_oracle() {
        let mut rng = StdRng::seed_from_u64(1786);

        for atoms in [5, 8, 10, 12] {
            for ratio in [2.0, 3.0, 4.26, 5.0, 6.0] {
                let clauses = (atoms as f64 * ratio).round() as usize;

                for _ in 0..10 {
                    let cnf = random_3cnf(&mut rng, atoms, clauses);
                    let the_context = solved_context(&cnf);

                    match the_context.report() {
                        Report::Satisfiable => {
                            assert!(check_model(&cnf, &the_context));
                            assert!(brute_force_satisfiable(&cnf, atoms));
                        }

                        Report::Unsatisfiable => {
                            assert!(!brute_force_satisfiable(&cnf, atoms));
                        }

                        Report::Unknown => panic!("A solve without a verdict"),
                    }
                }
            }
        }
    }

    /// Beyond the reach of the oracle, satisfiable verdicts still carry checkable models.
    #[test]
    fn models_check_on_larger_instances() {
        let mut rng = StdRng::seed_from_u64(6215);

        for _ in 0..20 {
            let cnf = random_3cnf(&mut rng, 30, 90);
            let the_context = solved_context(&cnf);

            if the_context.report() == Report::Satisfiable {
                assert!(check_model(&cnf, &the_context));
            }
        }
    }
}
