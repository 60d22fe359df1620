use std::time::Duration;

use computor::solve_equation;
use computor_parser::{EquationParser, ParserConfig};
use computor_solver::{reduce_equation, solve};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

const EQUATIONS: &[&str] = &[
    "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0",
    "1 * X^0 - 2 * X^1 + 1 * X^2 = 0 * X^0",
    "1 * X^0 + 2 * X^1 + 5 * X^2 = 0",
    "6 * X^0 = 6 * X^0",
    "5 * X^0 - 6 * X^1 - 5.6 * X^3 = 0",
];

/// An equation with `terms` terms on each side, all of degree 2 or lower.
fn long_equation(terms: usize) -> String {
    let side = |offset: usize| {
        (0..terms)
            .map(|i| format!("{}.5 * X^{}", (i + offset) % 97, i % 3))
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!("{} = {}", side(0), side(7))
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    group.bench_function("scenarios", |b| {
        b.iter(|| {
            for equation in EQUATIONS {
                let _ = black_box(solve_equation(black_box(equation), ParserConfig::strict()));
            }
        })
    });

    let long = long_equation(2_000);
    group.bench_function("parse_long", |b| {
        let parser = EquationParser::with_config(ParserConfig::strict());
        b.iter(|| black_box(parser.parse(black_box(&long))))
    });

    group.bench_function("reduce_and_solve_long", |b| {
        b.iter_batched(
            || EquationParser::new().parse(&long),
            |parsed| {
                if let Ok(equation) = parsed {
                    let reduced = reduce_equation(&equation);
                    let _ = black_box(solve(&reduced));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_pipeline
);

criterion_main!(benches);
