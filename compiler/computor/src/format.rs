//! Plain-text rendering of reduced forms, degrees and solutions.

use computor_ast::{Exponent, Polynomial, Solution, SolutionKind};

/// `"4.0 * X^0 + 4.0 * X^1 - 9.3 * X^2 = 0"`; an empty map renders `"0 = 0"`.
pub fn format_reduced_form(reduced: &Polynomial) -> String {
    format!("{reduced} = 0")
}

pub fn format_polynomial_degree(degree: Exponent) -> String {
    format!("Polynomial degree: {degree}")
}

/// The message shown for a solution, one root per line.
pub fn format_solution(solution: &Solution) -> String {
    let roots: Vec<String> = solution.roots.iter().map(ToString::to_string).collect();
    let header = match solution.kind {
        SolutionKind::Positive => "Discriminant is strictly positive, the two solutions are:",
        SolutionKind::Zero | SolutionKind::Linear => "The solution is:",
        SolutionKind::Negative => {
            "Discriminant is strictly negative, the two complex solutions are:"
        }
        SolutionKind::Infinite => return "Any real number is a solution.".to_string(),
        SolutionKind::NoSolution => return "No solution.".to_string(),
        SolutionKind::Unsolvable => {
            return "The polynomial degree is strictly greater than 2, I can't solve.".to_string()
        }
    };

    let mut lines = vec![header.to_string()];
    lines.extend(roots);
    lines.join("\n")
}
