mod phole {
    use vole_sat::reports::Report;
    use vole_tests::{check_model, pigeonhole, report_of, solved_context};

    #[test]
    fn three_pigeons_two_holes() {
        assert_eq!(report_of(&pigeonhole(3, 2)), Report::Unsatisfiable);
    }

    #[test]
    fn normal() {
        for holes in [3, 4] {
            assert_eq!(
                report_of(&pigeonhole(holes + 1, holes)),
                Report::Unsatisfiable
            );
        }
    }

    #[test]
    #[ignore = "expensive"]
    fn tough_five() {
        assert_eq!(report_of(&pigeonhole(6, 5)), Report::Unsatisfiable);
    }

    #[test]
    fn equal_counts_fit() {
        let cnf = pigeonhole(3, 3);
        let the_context = solved_context(&cnf);

        assert_eq!(the_context.report(), Report::Satisfiable);
        assert!(check_model(&cnf, &the_context));
    }
}
