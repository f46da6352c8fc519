use crate::{
    context::Context,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ParseError},
};

use std::io::BufRead;

/// Details from parsing a DIMACS input: the counts claimed by the problem line, if any, and the
/// counts actually added.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    pub expected_atoms: Option<usize>,
    pub expected_clauses: Option<usize>,
    pub added_atoms: usize,
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS formula into the context.
    ///
    /// DIMACS variables are 1-indexed, and are translated to 0-indexed atoms.
    /// Comment lines, a `p cnf` problem line, and a terminating `%` are understood; clauses may
    /// span lines, and each is delimited by `0`.
    ///
    /// Clauses are added as given: no sorting, deduplication, or tautology removal.
    ///
    /// ```rust
    /// # use vole_sat::context::Context;
    /// # use vole_sat::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 4 3
    ///  1  2  3 0
    /// -1  2    0
    ///     3 -4 0
    /// ");
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
    /// assert!(the_context.solve().is_ok());
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::default();
        let mut clause_buffer: CClause = CClause::default();
        let mut info = ParserInfo::default();

        let mut lines = 0;
        let mut added_clauses = 0;

        // First phase: read until the formula begins.
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(1) if buffer.starts_with('\n') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.chars().next() {
                Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();

                    let atoms: usize = match problem_details.nth(2) {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    let clauses: usize = match problem_details.next() {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    buffer.clear();

                    self.ensure_atoms(atoms);

                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                _ => break 'preamble_loop,
            }
        }

        // Second phase: read until the formula ends.
        // The line is advanced at the end of the loop, as the preamble left a relevant line in
        // the buffer.
        'formula_loop: loop {
            match buffer.chars().next() {
                Some('%') => break 'formula_loop,

                Some('c') => {}

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(clause)?;
                                added_clauses += 1;
                            }

                            _ => {
                                let value = match item.parse::<i64>() {
                                    Ok(value) => value,
                                    Err(_) => {
                                        return Err(err::ErrorKind::from(ParseError::Line(lines)))
                                    }
                                };

                                let literal = match CLiteral::try_from(value) {
                                    Ok(literal) => literal,
                                    Err(_) => {
                                        return Err(err::ErrorKind::from(ParseError::Line(lines)))
                                    }
                                };

                                clause_buffer.push(literal);
                            }
                        }
                    }
                }
            }

            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(ParseError::MissingDelimiter));
        }

        info.added_atoms = self.atom_db.count();
        info.added_clauses = added_clauses;

        Ok(info)
    }
}
