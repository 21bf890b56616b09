use bellman_queens::graph::Graph;
use bellman_queens::graph::bellman_ford::run;
use bellman_queens::queens::{BatsatOracle, ConstraintEncoder, SolutionEnumerator};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn random_graph(rng: &mut fastrand::Rng, vertices: usize, edges: usize, min_weight: i32) -> Graph {
    Graph::from_edges((0..edges).map(|_| {
        let source = rng.usize(..vertices);
        let target = rng.usize(..vertices);
        let weight = f64::from(rng.i32(min_weight..100));
        (format!("v{source}"), format!("v{target}"), weight)
    }))
}

/// A path `v0 -> v1 -> ... -> vn` listed back to front, so every pass settles one vertex.
fn reversed_chain(vertices: usize) -> Graph {
    Graph::from_edges(
        (0..vertices - 1)
            .rev()
            .map(|i| (format!("v{i:05}"), format!("v{:05}", i + 1), 1.0)),
    )
}

fn bench_bellman_ford(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut group = c.benchmark_group("bellman-ford");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(10));

    for &(vertices, edges) in &[(100, 500), (500, 5_000), (2_000, 20_000)] {
        let positive = random_graph(&mut rng, vertices, edges, 0);
        let mixed = random_graph(&mut rng, vertices, edges, -5);

        group.bench_with_input(
            BenchmarkId::new("non-negative", vertices),
            &positive,
            |b, graph| b.iter(|| black_box(run(graph, "v0"))),
        );
        group.bench_with_input(BenchmarkId::new("mixed", vertices), &mixed, |b, graph| {
            b.iter(|| black_box(run(graph, "v0")));
        });
    }

    let chain = reversed_chain(300);
    group.bench_function("reversed chain", |b| {
        b.iter(|| black_box(run(&chain, "v00000")));
    });

    group.finish();
}

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-queens");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    for n in [8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("encode", n), &n, |b, &n| {
            b.iter(|| {
                let encoder = ConstraintEncoder::new(n).unwrap();
                black_box(encoder.clauses().count())
            });
        });
    }

    for n in [6, 8] {
        group.bench_with_input(BenchmarkId::new("enumerate", n), &n, |b, &n| {
            b.iter(|| {
                let mut enumerator = SolutionEnumerator::new(n, BatsatOracle::new()).unwrap();
                black_box(enumerator.enumerate().unwrap().count)
            });
        });
    }

    group.bench_function("first solution (n = 30)", |b| {
        b.iter(|| {
            let mut enumerator = SolutionEnumerator::new(30, BatsatOracle::new()).unwrap();
            black_box(enumerator.next_solution().unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bellman_ford, bench_queens);

criterion_main!(benches);
