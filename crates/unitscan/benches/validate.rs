//! Throughput of the `unitscan` validators and matchers next to the standard library.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use unitscan::{ByteOrder, SearchOptions, search_ascii, validate_utf8, validate_utf16, validate_utf32};

/// Deterministic mixed-width text of at least `target_len` bytes of UTF-8.
fn make_text(target_len: usize) -> String {
    const SAMPLE: &str = "plain ascii, κόσμε, €uro, 😀 emoji; ";
    let mut s = String::with_capacity(target_len + SAMPLE.len());
    while s.len() < target_len {
        s.push_str(SAMPLE);
    }
    s
}

fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for &size in &[1_024usize, 64 * 1_024] {
        let text = make_text(size);
        let utf16: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        let utf32: Vec<u8> = text.chars().flat_map(|ch| u32::from(ch).to_le_bytes()).collect();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("utf8", size), text.as_bytes(), |b, bytes| {
            b.iter(|| validate_utf8(black_box(bytes)));
        });
        group.bench_with_input(BenchmarkId::new("std_from_utf8", size), text.as_bytes(), |b, bytes| {
            b.iter(|| std::str::from_utf8(black_box(bytes)).is_ok());
        });
        group.bench_with_input(BenchmarkId::new("utf16le", size), &utf16, |b, bytes| {
            b.iter(|| validate_utf16(black_box(bytes), ByteOrder::LittleEndian));
        });
        group.bench_with_input(BenchmarkId::new("utf32le", size), &utf32, |b, bytes| {
            b.iter(|| validate_utf32(black_box(bytes), ByteOrder::LittleEndian));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut source = "x".repeat(64 * 1_024);
    source.push_str("test1234567890!@#$%^&*()");
    let pattern = b"test1234567890!@#$%^&*()";

    c.bench_function("search_ascii_tail", |b| {
        b.iter(|| search_ascii(black_box(source.as_bytes()), black_box(pattern), SearchOptions::default()));
    });
}

criterion_group!(benches, bench_validators, bench_search);
criterion_main!(benches);
