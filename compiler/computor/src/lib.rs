//! Parse, reduce and solve a polynomial equation in one call.

pub mod format;

use std::fmt;

use computor_ast::{Exponent, Polynomial, Solution};
use computor_parser::{EquationParser, ParseError, ParserConfig};
use computor_solver::{reduce_equation, SolveError, Solver};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use format::{format_polynomial_degree, format_reduced_form, format_solution};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Everything computed for one equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub reduced: Polynomial,
    pub degree: Exponent,
    pub solution: Solution,
}

/// Renders the three blocks the command line prints, one per line.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reduced form: {}", format_reduced_form(&self.reduced))?;
        writeln!(f, "{}", format_polynomial_degree(self.degree))?;
        write!(f, "{}", format_solution(&self.solution))
    }
}

/// Parses `equation`, reduces it to `P(X) = 0` and solves it.
///
/// # Examples
///
/// ```
/// use computor::solve_equation;
/// use computor_ast::SolutionKind;
/// use computor_parser::ParserConfig;
///
/// let report = solve_equation("5 * X^0 + 4 * X^1 = 4 * X^0", ParserConfig::strict()).unwrap();
/// assert_eq!(report.degree, 1);
/// assert_eq!(report.solution.kind, SolutionKind::Linear);
/// ```
pub fn solve_equation(equation: &str, config: ParserConfig) -> Result<Report, Error> {
    let parsed = EquationParser::with_config(config).parse(equation)?;
    let reduced = reduce_equation(&parsed);

    let solver = Solver::new(&reduced);
    let degree = solver.degree();
    let solution = solver.solve()?;
    info!("'{equation}': degree {degree}, {}", solution.kind);

    Ok(Report {
        reduced,
        degree,
        solution,
    })
}
