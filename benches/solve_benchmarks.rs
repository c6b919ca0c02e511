//! Benchmarks against synthetic DIMACS-scale random graphs (spec §1's
//! "DIMACS-family benchmark regime"), mirroring the benchmark harness used
//! across the retrieval pack (`criterion`, used by `petgraph`, `woflang`,
//! and `rosetta-ruchy`).

use criterion::{criterion_group, criterion_main, Criterion};

use exact_chromatic::{solve, Graph, SolveOptions, Strategy};

/// A tiny splitmix64-style PRNG, used only to generate reproducible
/// synthetic benchmark graphs (the engine itself has no randomness).
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// builds a G(n, p) Erdos-Renyi random graph's CSR arrays.
fn random_graph_csr(n: usize, p: f64, seed: u64) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    let mut rng = SplitMix64(seed);
    let mut adj_list: Vec<Vec<usize>> = vec![Vec::new(); n];
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.next_f64() < p {
                adj_list[u].push(v);
                adj_list[v].push(u);
            }
        }
    }
    for l in &mut adj_list {
        l.sort_unstable();
    }
    let mut adj = Vec::new();
    let mut start = Vec::with_capacity(n);
    let mut deg = Vec::with_capacity(n);
    for l in &adj_list {
        start.push(adj.len());
        deg.push(l.len());
        adj.extend_from_slice(l);
    }
    (adj, start, deg)
}

fn bench_strategy(c: &mut Criterion, name: &str, strategy: Strategy) {
    let (adj, start, deg) = random_graph_csr(60, 0.1, 0xC0FFEE);
    let graph = Graph::new(&adj, &start, &deg).unwrap();
    c.bench_function(name, |b| {
        b.iter(|| solve(&graph, SolveOptions::new(strategy, 10.0), None).unwrap());
    });
}

fn classic_dsatur(c: &mut Criterion) {
    bench_strategy(c, "classic_dsatur_n60_p0.1", Strategy::ClassicDsatur);
}

fn sewell(c: &mut Criterion) {
    bench_strategy(c, "sewell_n60_p0.1", Strategy::Sewell);
}

fn furini(c: &mut Criterion) {
    bench_strategy(c, "furini_n60_p0.1", Strategy::Furini);
}

criterion_group!(benches, classic_dsatur, sewell, furini);
criterion_main!(benches);
