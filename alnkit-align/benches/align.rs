use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use alnkit_align::{AffineAligner, AlignMode, ConsolidatingAligner, LinearAligner, SimpleCost};

fn random_elements(len: usize, seed: u64) -> Vec<u8> {
    let alphabet = [b'a', b'c', b'g', b't'];
    // Deterministic pseudo-random for reproducibility
    let mut seq = Vec::with_capacity(len);
    let mut state = seed;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(alphabet[((state >> 33) % 4) as usize]);
    }
    seq
}

fn mutate_elements(seq: &[u8], rate: f64) -> Vec<u8> {
    let alphabet = [b'a', b'c', b'g', b't'];
    let mut out = seq.to_vec();
    let mut state: u64 = 137;
    for e in out.iter_mut() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = (state >> 33) as f64 / (u32::MAX as f64);
        if r < rate {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *e = alphabet[((state >> 33) % 4) as usize];
        }
    }
    out
}

fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("global");

    for &len in &[100, 1000] {
        let a = random_elements(len, 42);
        let b = mutate_elements(&a, 0.1);

        group.bench_with_input(BenchmarkId::new("linear", len), &len, |bch, _| {
            let mut al = LinearAligner::new(SimpleCost::default());
            bch.iter(|| al.global_align(black_box(a.as_slice()), black_box(b.as_slice())))
        });

        group.bench_with_input(BenchmarkId::new("affine", len), &len, |bch, _| {
            let cost = SimpleCost::new(1.0, -0.35, -2.0, -0.3, -0.1).unwrap();
            let mut al = AffineAligner::new(cost);
            bch.iter(|| al.global_align(black_box(a.as_slice()), black_box(b.as_slice())))
        });
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let a = random_elements(500, 7);
    let b = mutate_elements(&a, 0.2);

    let mut group = c.benchmark_group("modes");
    for mode in [AlignMode::Global, AlignMode::Semi, AlignMode::Partial] {
        group.bench_with_input(BenchmarkId::new("linear", format!("{mode:?}")), &mode, |bch, &mode| {
            let mut al = LinearAligner::new(SimpleCost::default());
            bch.iter(|| al.align(black_box(a.as_slice()), black_box(b.as_slice()), mode))
        });
    }
    group.finish();
}

fn bench_consolidating(c: &mut Criterion) {
    // Quadratic-times-run-length fill, so keep the inputs short
    let a = random_elements(100, 11);
    let b = mutate_elements(&a, 0.1);

    c.bench_function("consolidating/global/100", |bch| {
        let mut al = ConsolidatingAligner::new(SimpleCost::default());
        bch.iter(|| al.global_align(black_box(a.as_slice()), black_box(b.as_slice())))
    });
}

criterion_group!(benches, bench_families, bench_modes, bench_consolidating);
criterion_main!(benches);
