use criterion::{criterion_group, criterion_main, Criterion};
use index_core::HashDictionary;

fn bench_hash(c: &mut Criterion) {
    let dict = HashDictionary::new();
    let tokens = ["perro", "gato", "pato", "electroencefalografista"];
    c.bench_function("hash_tokens", |b| {
        b.iter(|| tokens.iter().map(|t| dict.hash(t)).sum::<usize>())
    });
}

criterion_group!(benches, bench_hash);
criterion_main!(benches);
