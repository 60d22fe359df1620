use computor_ast::Polynomial;
use computor_parser::EquationParser;
use computor_solver::{effective_degree, reduce, sqrt};
use proptest::prelude::*;

fn coefficient() -> impl Strategy<Value = f64> {
    (-1000i32..1000, 0u8..10).prop_map(|(whole, tenth)| whole as f64 + tenth as f64 / 10.0)
}

fn polynomial() -> impl Strategy<Value = Polynomial> {
    prop::collection::btree_map(0i64..6, coefficient(), 1..5).prop_map(Polynomial::from)
}

/// Writes a polynomial back out as `a * X^p` terms.
fn side_text(polynomial: &Polynomial) -> String {
    polynomial
        .iter()
        .enumerate()
        .map(|(i, (exponent, coefficient))| match (i, coefficient < 0.0) {
            (0, _) => format!("{coefficient} * X^{exponent}"),
            (_, true) => format!(" - {} * X^{exponent}", -coefficient),
            (_, false) => format!(" + {coefficient} * X^{exponent}"),
        })
        .collect()
}

proptest! {
    #[test]
    fn parsing_is_idempotent(left in polynomial(), right in polynomial()) {
        let equation = format!("{} = {}", side_text(&left), side_text(&right));
        let parser = EquationParser::new();
        let first = parser.parse(&equation).unwrap();
        let second = parser.parse(&equation).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.left, left);
    }

    #[test]
    fn reducing_a_side_against_itself_is_zero(side in polynomial()) {
        prop_assert_eq!(reduce(&side, &side), Polynomial::from([(0, 0.0)]));
    }

    #[test]
    fn reduction_is_termwise_difference(left in polynomial(), right in polynomial()) {
        let reduced = reduce(&left, &right);
        for exponent in left.exponents().chain(right.exponents()) {
            let expected = left.coefficient(exponent) - right.coefficient(exponent);
            if expected.abs() > 1e-10 {
                prop_assert_eq!(reduced.coefficient(exponent), expected);
            } else {
                prop_assert!(exponent == 0 || !reduced.contains_exponent(exponent));
            }
        }
    }

    #[test]
    fn degree_ignores_zero_coefficients(side in polynomial(), extra in 6i64..20) {
        let mut padded = side.clone();
        padded.insert(extra, 0.0);
        prop_assert_eq!(effective_degree(&padded), effective_degree(&side));
    }

    #[test]
    fn sqrt_squares_back(x in 0.0f64..1e9) {
        let root = sqrt(x).unwrap();
        prop_assert!((root * root - x).abs() <= 1e-9 * x.max(1.0));
    }
}
