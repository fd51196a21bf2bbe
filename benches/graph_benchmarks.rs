use algograph::{Algorithm, AlgorithmRequest, Engine, EngineConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random graph with `degree` outgoing edges per node
fn random_graph(algorithm: Algorithm, nodes: usize, degree: usize) -> AlgorithmRequest {
    let mut rng = StdRng::seed_from_u64(nodes as u64);
    let edges: Vec<_> = (0..nodes * degree)
        .map(|i| (i / degree, rng.gen_range(0..nodes), rng.gen_range(1..100) as f64))
        .collect();
    AlgorithmRequest::new(algorithm, nodes)
        .with_edges(edges)
        .with_source(0)
}

/// Benchmark the near-linear algorithms on growing graphs
fn bench_sparse_algorithms(c: &mut Criterion) {
    let engine = Engine::new(EngineConfig::unlimited());

    for algorithm in [Algorithm::Dijkstra, Algorithm::Prims, Algorithm::Kruskal] {
        let mut group = c.benchmark_group(algorithm.name());
        for size in [1_000, 10_000, 100_000].iter() {
            let request = random_graph(algorithm, *size, 8);
            group.bench_with_input(BenchmarkId::from_parameter(size), &request, |b, request| {
                b.iter(|| {
                    let response = engine.execute(request).unwrap();
                    criterion::black_box(response.edge_count);
                });
            });
        }
        group.finish();
    }
}

/// Benchmark Bellman-Ford, O(V * E)
fn bench_bellman_ford(c: &mut Criterion) {
    let engine = Engine::new(EngineConfig::unlimited());
    let mut group = c.benchmark_group("bellman_ford");

    for size in [100, 1_000, 5_000].iter() {
        let request = random_graph(Algorithm::BellmanFord, *size, 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), &request, |b, request| {
            b.iter(|| criterion::black_box(engine.execute(request).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark Floyd-Warshall, O(V^3)
fn bench_floyd_warshall(c: &mut Criterion) {
    let engine = Engine::new(EngineConfig::unlimited());
    let mut group = c.benchmark_group("floyd_warshall");
    group.sample_size(10);

    for size in [50, 200, 400].iter() {
        let request = random_graph(Algorithm::FloydWarshall, *size, 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), &request, |b, request| {
            b.iter(|| criterion::black_box(engine.execute(request).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark parallel batch execution against running the same requests one by one
fn bench_batch(c: &mut Criterion) {
    let engine = Engine::new(EngineConfig::unlimited());
    let requests: Vec<_> = (0..64)
        .map(|i| random_graph(Algorithm::all()[i % 5], 300 + i, 4))
        .collect();

    let mut group = c.benchmark_group("batch");
    group.bench_function("parallel", |b| {
        b.iter(|| criterion::black_box(engine.execute_batch(&requests)));
    });
    group.bench_function("sequential", |b| {
        b.iter(|| {
            let results: Vec<_> = requests.iter().map(|r| engine.execute(r)).collect();
            criterion::black_box(results)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_sparse_algorithms,
    bench_bellman_ford,
    bench_floyd_warshall,
    bench_batch
);
criterion_main!(benches);
