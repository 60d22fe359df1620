// Degree dispatch for a reduced polynomial: constant, linear and quadratic
// equations are solved, anything of higher degree is reported as such.

use computor_ast::{Exponent, Polynomial, Root, Solution, SolutionKind};
use log::debug;

use crate::error::SolveError;
use crate::sqrt::sqrt;

/// Below this magnitude a constant equation reads `0 = 0`.
const ZERO_TOLERANCE: f64 = 1e-10;

/// Highest exponent with a non-zero coefficient, 0 if there is none.
///
/// Zero-coefficient terms do not count, so `{0: 1, 2: 0}` has degree 0.
pub fn effective_degree(polynomial: &Polynomial) -> Exponent {
    polynomial
        .iter()
        .filter(|(_, coefficient)| *coefficient != 0.0)
        .map(|(exponent, _)| exponent)
        .max()
        .unwrap_or(0)
}

/// `-0.0` prints as "-0.0"; roots that are zero are reported as `0.0`.
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

pub struct Solver<'a> {
    reduced: &'a Polynomial,
}

impl<'a> Solver<'a> {
    pub fn new(reduced: &'a Polynomial) -> Self {
        Solver { reduced }
    }

    pub fn degree(&self) -> Exponent {
        effective_degree(self.reduced)
    }

    /// Solves `reduced = 0` according to its effective degree.
    ///
    /// # Examples
    ///
    /// ```
    /// use computor_ast::{Polynomial, SolutionKind};
    /// use computor_solver::Solver;
    ///
    /// let reduced = Polynomial::from([(0, 1.0), (1, -2.0), (2, 1.0)]);
    /// let solution = Solver::new(&reduced).solve().unwrap();
    /// assert_eq!(solution.kind, SolutionKind::Zero);
    /// assert_eq!(solution.discriminant, Some(0.0));
    /// ```
    pub fn solve(&self) -> Result<Solution, SolveError> {
        let degree = self.degree();
        debug!("solving '{} = 0' as degree {degree}", self.reduced);

        let solution = match degree {
            0 => self.solve_constant(),
            1 => self.solve_linear(),
            2 => self.solve_quadratic()?,
            _ => Solution::bare(SolutionKind::Unsolvable),
        };
        debug!("solution kind: {}", solution.kind);
        Ok(solution)
    }

    fn solve_constant(&self) -> Solution {
        let c = self.reduced.coefficient(0);
        if c.abs() < ZERO_TOLERANCE {
            Solution::bare(SolutionKind::Infinite)
        } else {
            Solution::bare(SolutionKind::NoSolution)
        }
    }

    fn solve_linear(&self) -> Solution {
        let b = self.reduced.coefficient(1);
        let c = self.reduced.coefficient(0);
        Solution::linear(positive_zero(-c / b))
    }

    fn solve_quadratic(&self) -> Result<Solution, SolveError> {
        let a = self.reduced.coefficient(2);
        let b = self.reduced.coefficient(1);
        let c = self.reduced.coefficient(0);
        let discriminant = b * b - 4.0 * a * c;
        debug!("discriminant: {discriminant}");

        let solution = if discriminant > 0.0 {
            let root = sqrt(discriminant)?;
            Solution::quadratic(
                SolutionKind::Positive,
                discriminant,
                vec![
                    Root::real(positive_zero((-b + root) / (2.0 * a))),
                    Root::real(positive_zero((-b - root) / (2.0 * a))),
                ],
            )
        } else if discriminant == 0.0 {
            Solution::quadratic(
                SolutionKind::Zero,
                discriminant,
                vec![Root::real(positive_zero(-b / (2.0 * a)))],
            )
        } else {
            let re = positive_zero(-b / (2.0 * a));
            let im = sqrt(discriminant.abs())? / (2.0 * a);
            Solution::quadratic(
                SolutionKind::Negative,
                discriminant,
                vec![Root::complex(re, im), Root::complex(re, -im)],
            )
        };
        Ok(solution)
    }
}

/// Solves a reduced polynomial; shorthand for [`Solver::solve`].
pub fn solve(reduced: &Polynomial) -> Result<Solution, SolveError> {
    Solver::new(reduced).solve()
}
