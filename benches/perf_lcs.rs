use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lcs_path::{build_table, reconstruct_path, LcsEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_build_table");
    for &len in &[100usize, 500, 1_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let s = random_dna(&mut rng, len);
        let t = random_dna(&mut rng, len);
        group.bench_function(format!("len_{len}"), |b| {
            b.iter(|| black_box(build_table(&s, &t).lcs_len()))
        });
    }
    group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_reconstruct_path");
    for &len in &[100usize, 500, 1_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let s = random_dna(&mut rng, len);
        let t = random_dna(&mut rng, len);
        let table = build_table(&s, &t);
        group.bench_function(format!("len_{len}"), |b| {
            b.iter(|| {
                let path = reconstruct_path(&table, &s, &t).expect("dimensions match");
                black_box(path.len())
            })
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let engine = LcsEngine::new();
    c.bench_function("lcs_align_batch_64x200", |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(1);
                (0..64)
                    .map(|_| (random_dna(&mut rng, 200), random_dna(&mut rng, 200)))
                    .collect::<Vec<_>>()
            },
            |pairs| black_box(engine.align_batch(&pairs).len()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_build_table, bench_reconstruct, bench_batch);
criterion_main!(benches);
