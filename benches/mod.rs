use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    hex::bench_encode,
    hex::bench_decode,
    wordlist::bench_slice,
    wordlist::bench_strip_format_chars
);
criterion_main!(benches);
