use boring_algebra::cayley;
use boring_algebra::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_interning(c: &mut Criterion) {
    let field = presets::integers_mod_prime(10_007).unwrap();
    for rep in 0..10_007 {
        field.element(rep);
    }

    c.bench_function("intern_existing_element", |b| {
        let mut rep = 0_i64;
        b.iter(|| {
            rep = (rep + 7919) % 100_000;
            black_box(field.element(rep))
        })
    });
}

fn bench_field_ops(c: &mut Criterion) {
    let field = presets::integers_mod_prime(1_000_003).unwrap();
    let x = field.element(123_456);
    let y = field.element(654_321);

    c.bench_function("prime_field_mul", |b| b.iter(|| black_box(&x * &y)));
    c.bench_function("prime_field_div", |b| b.iter(|| black_box(&x / &y)));
    c.bench_function("prime_field_pow_1e9", |b| {
        b.iter(|| black_box(x.pow(black_box(1_000_000_000))))
    });
}

fn bench_matrix_pow(c: &mut Criterion) {
    let m3 = presets::square_matrices(3);
    let shear = m3.element(ndarray::array![[1, 1, 0], [0, 1, 1], [0, 0, 1]]);

    c.bench_function("matrix_pow_64", |b| b.iter(|| black_box(shear.pow(64))));
}

fn bench_law_checks(c: &mut Criterion) {
    let ring = presets::integers_mod(97).unwrap();
    let pool: Vec<i64> = (0..97).collect();

    let mut group = c.benchmark_group("ring_laws");
    for &threshold in &[usize::MAX, 8] {
        let config = LawConfig {
            sample_size: 40,
            parallel_threshold: threshold,
            seed: Some(7),
            check_commutativity: false,
        };
        let checker = LawChecker::random(ring.clone(), &pool, config).unwrap();
        let name = if threshold == usize::MAX { "sequential" } else { "parallel" };
        group.bench_function(name, |b| b.iter(|| black_box(checker.ring())));
    }
    group.finish();
}

fn bench_cayley_graph(c: &mut Criterion) {
    let group = presets::cyclic_group(500).unwrap();
    let generators = [group.element(3), group.element(7)];

    c.bench_function("cayley_graph_c500", |b| {
        b.iter(|| black_box(cayley::cayley_graph(&group, &generators, 1_000)))
    });
}

criterion_group!(
    benches,
    bench_interning,
    bench_field_ops,
    bench_matrix_pow,
    bench_law_checks,
    bench_cayley_graph
);
criterion_main!(benches);
