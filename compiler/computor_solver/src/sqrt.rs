use crate::error::SolveError;

/// Stop once two successive guesses differ by less than this.
pub const PRECISION: f64 = 1e-10;

/// Square root by Newton iteration, starting from `x / 2`.
///
/// # Examples
///
/// ```
/// use computor_solver::sqrt;
///
/// assert!((sqrt(16.0).unwrap() - 4.0).abs() < 1e-10);
/// assert_eq!(sqrt(0.0).unwrap(), 0.0);
/// assert!(sqrt(-1.0).is_err());
/// ```
pub fn sqrt(x: f64) -> Result<f64, SolveError> {
    if x < 0.0 {
        return Err(SolveError::NegativeSqrt(x));
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    if !x.is_finite() {
        return Ok(x);
    }

    let mut guess = x / 2.0;
    let mut first = true;
    loop {
        let next = (guess + x / guess) / 2.0;
        if (next - guess).abs() < PRECISION {
            return Ok(next);
        }
        // From the second step on guesses only decrease; a step that does not
        // means the last float digit is oscillating.
        if !first && next >= guess {
            return Ok(guess);
        }
        guess = next;
        first = false;
    }
}
