use computor_ast::{Equation, Polynomial};
use log::debug;

/// Coefficients at or below this magnitude are treated as cancelled.
pub const EPSILON: f64 = 1e-10;

/// Moves every right-hand term to the left, giving `left - right = 0`.
///
/// Cancelled entries are dropped; if nothing is left the result is `{0: 0}`.
///
/// # Examples
///
/// ```
/// use computor_ast::Polynomial;
/// use computor_solver::reduce;
///
/// let left = Polynomial::from([(0, 5.0), (1, 4.0), (2, -9.3)]);
/// let right = Polynomial::from([(0, 1.0)]);
/// assert_eq!(
///     reduce(&left, &right),
///     Polynomial::from([(0, 4.0), (1, 4.0), (2, -9.3)])
/// );
/// ```
pub fn reduce(left: &Polynomial, right: &Polynomial) -> Polynomial {
    let mut reduced = left.clone();
    for (exponent, coefficient) in right.iter() {
        reduced.accumulate(exponent, -coefficient);
    }
    reduced.retain(|_, coefficient| coefficient.abs() > EPSILON);

    if reduced.is_empty() {
        reduced.insert(0, 0.0);
    }
    debug!("reduced form: {reduced}");
    reduced
}

/// [`reduce`] over both sides of a parsed equation.
pub fn reduce_equation(equation: &Equation) -> Polynomial {
    reduce(&equation.left, &equation.right)
}
