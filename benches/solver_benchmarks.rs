use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tabula::{
    problems::n_queens,
    solver::{
        config::SolverConfig,
        engine::CspSolver,
    },
};

fn bench_first_solution(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens_first_solution");
    for n in [6, 8, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let instance = n_queens(n);
            let config = SolverConfig {
                first_solution_only: true,
                ..SolverConfig::default()
            };
            b.iter(|| {
                let report =
                    CspSolver::new(instance.clone(), config.clone()).solve();
                black_box(report.solutions.len())
            });
        });
    }
    group.finish();
}

fn bench_all_solutions(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens_all_solutions");
    for n in [6, 7] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let instance = n_queens(n);
            let config = SolverConfig::default();
            b.iter(|| {
                let report =
                    CspSolver::new(instance.clone(), config.clone()).solve();
                black_box(report.solutions.len())
            });
        });
    }
    group.finish();
}

fn bench_without_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens_plain_backtracking");
    group.bench_function("6", |b| {
        let instance = n_queens(6);
        let config = SolverConfig {
            use_ac3: false,
            use_forward_checking: false,
            ac3_at_each_node: false,
            ..SolverConfig::default()
        };
        b.iter(|| {
            let report = CspSolver::new(instance.clone(), config.clone()).solve();
            black_box(report.solutions.len())
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_first_solution,
    bench_all_solutions,
    bench_without_propagation
);
criterion_main!(benches);
