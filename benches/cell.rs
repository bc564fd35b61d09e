//! A benchmark for the cell codec and the nibble helpers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexglyph::cell::{bits_to_digit, digit_to_bits};
use hexglyph::utils::nibbles;

fn test_cell_codec() {
    let mut sum = 0u32;
    for i in 0..1_000_000u32 {
        let glyph = digit_to_bits(i as u8);
        sum += bits_to_digit(glyph) as u32;
    }

    black_box(sum);
}

fn test_split_join() {
    let input: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
    let digits = nibbles::split(&input);
    let (bytes, truncated) = nibbles::join(&digits).unwrap();
    assert!(!truncated);

    black_box(bytes.len());
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("cell codec", |b| b.iter(test_cell_codec));
    c.bench_function("split and join", |b| b.iter(test_split_join));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
