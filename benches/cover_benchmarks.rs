//! Benchmarks for the cover algebra and the factoring pipeline
//!
//! Input covers are generated from a fixed-seed linear congruential
//! generator, so every run measures the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use factor_logic::{Cover, Literal};

/// Minimal deterministic generator; quality does not matter here
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// A pseudo-random cover: `cube_num` cubes of up to `max_lits` literals
/// over `var_num` variables
fn random_cover(seed: u64, var_num: usize, cube_num: usize, max_lits: usize) -> Cover {
    let mut rng = Lcg(seed);
    let mut cubes = Vec::with_capacity(cube_num);
    for _ in 0..cube_num {
        let n = 1 + (rng.next() as usize) % max_lits;
        let mut lits = Vec::with_capacity(n);
        for _ in 0..n {
            let var = (rng.next() as usize) % var_num;
            let negative = rng.next() & 1 == 1;
            // skip the variable rather than conflict with an earlier pick
            if lits
                .iter()
                .all(|l: &Literal| l.var() != var)
            {
                lits.push(Literal::new(var, negative));
            }
        }
        cubes.push(lits);
    }
    Cover::new(var_num, &cubes).expect("generated cubes are conflict-free")
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for &cube_num in &[16usize, 64, 256] {
        let lists = random_cover(1, 32, cube_num, 6).literal_list();
        group.bench_with_input(
            BenchmarkId::from_parameter(cube_num),
            &lists,
            |b, lists| b.iter(|| Cover::new(32, black_box(lists)).unwrap()),
        );
    }
    group.finish();
}

fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("product");
    for &cube_num in &[8usize, 16, 32] {
        let left = random_cover(2, 32, cube_num, 4);
        let right = random_cover(3, 32, cube_num, 4);
        group.bench_with_input(
            BenchmarkId::from_parameter(cube_num),
            &(left, right),
            |b, (left, right)| b.iter(|| black_box(left) * black_box(right)),
        );
    }
    group.finish();
}

fn bench_algdiv(c: &mut Criterion) {
    let left = random_cover(4, 32, 24, 3);
    let right = random_cover(5, 32, 6, 2);
    let product = &left * &right;
    c.bench_function("algdiv", |b| {
        b.iter(|| black_box(&product) / black_box(&right))
    });
}

/// The classic kernel workload: adf + aef + bdf + bef + cdf + cef + bfg + h
fn kernel_fixture() -> Cover {
    let l = Literal::positive;
    Cover::new(
        8,
        &[
            vec![l(0), l(3), l(5)],
            vec![l(0), l(4), l(5)],
            vec![l(1), l(3), l(5)],
            vec![l(1), l(4), l(5)],
            vec![l(2), l(3), l(5)],
            vec![l(2), l(4), l(5)],
            vec![l(1), l(5), l(6)],
            vec![l(7)],
        ],
    )
    .unwrap()
}

fn bench_kernels(c: &mut Criterion) {
    let fixture = kernel_fixture();
    c.bench_function("all_kernels", |b| {
        b.iter(|| black_box(&fixture).all_kernels())
    });
    c.bench_function("best_kernel", |b| {
        b.iter(|| black_box(&fixture).best_kernel())
    });
}

fn bench_factoring(c: &mut Criterion) {
    let fixture = kernel_fixture();
    c.bench_function("quick_factor", |b| {
        b.iter(|| black_box(&fixture).quick_factor())
    });
    c.bench_function("good_factor", |b| {
        b.iter(|| black_box(&fixture).good_factor())
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_product,
    bench_algdiv,
    bench_kernels,
    bench_factoring
);
criterion_main!(benches);
