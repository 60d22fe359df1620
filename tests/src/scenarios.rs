use computor::{format_solution, solve_equation, Error};
use computor_ast::{Polynomial, Root, SolutionKind};
use computor_parser::{EquationParser, ParseError, ParserConfig};
use pretty_assertions::assert_eq;

use crate::init_logger;

fn strict() -> ParserConfig {
    ParserConfig::strict()
}

fn real_roots(roots: &[Root]) -> Vec<f64> {
    roots.iter().filter_map(Root::as_real).collect()
}

#[test]
fn quadratic_with_positive_discriminant() {
    init_logger();
    let equation = "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0";

    let parsed = EquationParser::with_config(strict()).parse(equation).unwrap();
    assert_eq!(parsed.left, Polynomial::from([(0, 5.0), (1, 4.0), (2, -9.3)]));
    assert_eq!(parsed.right, Polynomial::from([(0, 1.0)]));

    let report = solve_equation(equation, strict()).unwrap();
    assert_eq!(report.reduced, Polynomial::from([(0, 4.0), (1, 4.0), (2, -9.3)]));
    assert_eq!(report.degree, 2);
    assert_eq!(report.solution.kind, SolutionKind::Positive);

    let roots = real_roots(&report.solution.roots);
    assert_eq!(roots.len(), 2);
    assert!((roots[0] + 0.475131463908869).abs() < 1e-9);
    assert!((roots[1] - 0.905238990790590).abs() < 1e-9);

    let text = report.to_string();
    assert!(text.starts_with(
        "Reduced form: 4.0 * X^0 + 4.0 * X^1 - 9.3 * X^2 = 0\nPolynomial degree: 2\n"
    ));
    assert!(text.contains("Discriminant is strictly positive, the two solutions are:"));
}

#[test]
fn quadratic_with_zero_discriminant() {
    init_logger();
    let report = solve_equation("1 * X^0 - 2 * X^1 + 1 * X^2 = 0 * X^0", strict()).unwrap();
    assert_eq!(report.reduced, Polynomial::from([(0, 1.0), (1, -2.0), (2, 1.0)]));
    assert_eq!(report.solution.kind, SolutionKind::Zero);
    assert_eq!(report.solution.discriminant, Some(0.0));
    assert_eq!(report.solution.roots, vec![Root::real(1.0)]);
    assert_eq!(format_solution(&report.solution), "The solution is:\n1.0");
}

#[test]
fn quadratic_with_negative_discriminant() {
    init_logger();
    let report = solve_equation("1 * X^0 + 2 * X^1 + 5 * X^2 = 0 * X^0", strict()).unwrap();
    assert_eq!(report.solution.kind, SolutionKind::Negative);
    // b² - 4ac = 4 - 20
    assert_eq!(report.solution.discriminant, Some(-16.0));

    let z1 = report.solution.roots[0].as_complex().unwrap();
    let z2 = report.solution.roots[1].as_complex().unwrap();
    assert!((z1.re + 0.2).abs() < 1e-12);
    assert!((z1.im - 0.4).abs() < 1e-9);
    assert_eq!(z2, z1.conj());
}

#[test]
fn missing_equals_is_rejected() {
    init_logger();
    let err = solve_equation("5 * X^0 + 4 * X^1", strict()).unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::MissingEquals));
    assert!(err.to_string().contains("missing '=' sign"));
}

#[test]
fn identical_sides_accept_any_real() {
    init_logger();
    let report = solve_equation("6 * X^0 = 6 * X^0", strict()).unwrap();
    assert_eq!(report.reduced, Polynomial::from([(0, 0.0)]));
    assert_eq!(report.degree, 0);
    assert_eq!(report.solution.kind, SolutionKind::Infinite);
    assert_eq!(
        report.to_string(),
        "Reduced form: 0.0 * X^0 = 0\nPolynomial degree: 0\nAny real number is a solution."
    );
}

#[test]
fn cubic_is_unsolvable() {
    init_logger();
    for equation in [
        "5 * X^0 - 6 * X^1 - 5.6 * X^3 = 0",
        "5 * X^0 - 6 * X^1 - 5.6 * X^3 = 0 * X^0",
    ] {
        let report = solve_equation(equation, strict()).unwrap();
        assert_eq!(report.degree, 3);
        assert_eq!(report.solution.kind, SolutionKind::Unsolvable);
        assert!(report.solution.roots.is_empty());
        assert_eq!(report.solution.discriminant, None);
    }
}

#[test]
fn oversized_exponent_is_unsolvable() {
    init_logger();
    let report = solve_equation("1 * X^99999999999999999999 = 0", strict()).unwrap();
    assert_eq!(report.degree, i64::MAX);
    assert_eq!(report.solution.kind, SolutionKind::Unsolvable);
}

#[test]
fn malformed_exponent_is_a_term_format_error() {
    init_logger();
    for equation in ["2 * X^2.5 = 0", "2 * X^2. = 0", "1 * X^0 + 2 * X^2.5 = 0"] {
        let err = solve_equation(equation, strict()).unwrap_err();
        assert!(
            matches!(err, Error::Parse(ParseError::InvalidTermFormat { .. })),
            "{equation}: {err}"
        );
    }
}

#[test]
fn contradiction_has_no_solution() {
    init_logger();
    let report = solve_equation("5 * X^0 = 4 * X^0", strict()).unwrap();
    assert_eq!(report.solution.kind, SolutionKind::NoSolution);
    assert_eq!(format_solution(&report.solution), "No solution.");
}

#[test]
fn zero_high_degree_terms_do_not_raise_the_degree() {
    init_logger();
    let report = solve_equation("5 * X^0 + 4 * X^1 + 0 * X^2 = 4 * X^0", strict()).unwrap();
    assert_eq!(report.reduced, Polynomial::from([(0, 1.0), (1, 4.0)]));
    assert_eq!(report.degree, 1);
    assert_eq!(report.solution.roots, vec![Root::real(-0.25)]);
}

#[test]
fn cancelling_squares_drop_to_linear() {
    init_logger();
    let report = solve_equation("1 * X^2 + 2 * X^1 = 1 * X^2 + 4 * X^0", strict()).unwrap();
    assert_eq!(report.reduced, Polynomial::from([(0, -4.0), (1, 2.0)]));
    assert_eq!(report.degree, 1);
    assert_eq!(report.solution.roots, vec![Root::real(2.0)]);
}

#[test]
fn lenient_and_strict_agree_on_valid_input() {
    init_logger();
    let equation = "3 * X^0 + 1 * X^2 = 2 * X^1";
    assert_eq!(
        solve_equation(equation, strict()).unwrap(),
        solve_equation(equation, ParserConfig::default()).unwrap()
    );
}
