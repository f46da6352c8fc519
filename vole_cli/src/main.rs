//! A command line interface to the vole_sat library.
//!
//! Reads a DIMACS formula from a file (plain or xz-compressed), determines satisfiability, and
//! reports in the solver-competition style: an `s ` status line, and with `--model` a `v `
//! valuation line when satisfiable.
//!
//! Exit code 10 notes a satisfiable formula, and 20 an unsatisfiable formula.

use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use clap::Parser;

use vole_sat::{
    config::Config,
    context::Context,
    reports::Report,
    types::err::{self},
};

#[derive(Parser)]
#[command(name = "vole_sat", about = "A conflict-driven clause-learning SAT solver")]
struct Args {
    /// Path to a DIMACS CNF file, optionally xz-compressed.
    path: PathBuf,

    /// Print a model, when satisfiable.
    #[arg(long)]
    model: bool,

    /// Value fresh variables positively, until a solve values them otherwise.
    #[arg(long)]
    phase: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let config = Config {
        default_phase: args.phase,
    };
    let mut the_context = Context::from_config(config);

    let file = match File::open(&args.path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open {:?}", args.path);
            return ExitCode::FAILURE;
        }
    };

    let parse_result = match &args.path.extension() {
        Some(extension) if *extension == "xz" => {
            the_context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }
        Some(_) | None => the_context.read_dimacs(BufReader::new(&file)),
    };

    match parse_result {
        Ok(info) => {
            if let Some(expected) = info.expected_clauses {
                if expected != info.added_clauses {
                    println!(
                        "c Expected {expected} clauses, read {}",
                        info.added_clauses
                    );
                }
            }
        }

        // The formula is unsatisfiable on its unit clauses alone; solve will report below.
        Err(err::ErrorKind::Build(err::BuildError::Unsatisfiable)) => {}

        Err(e) => {
            println!("c Failed to parse {:?}: {e:?}", args.path);
            return ExitCode::FAILURE;
        }
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Error during solve: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    println!("s {report}");

    match report {
        Report::Satisfiable => {
            if args.model {
                println!("v {} 0", the_context.valuation_string());
            }
            ExitCode::from(10)
        }

        Report::Unsatisfiable => ExitCode::from(20),

        Report::Unknown => ExitCode::FAILURE,
    }
}
