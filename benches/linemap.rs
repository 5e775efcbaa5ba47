//! Benchmarks for class file parsing and line map construction.
//!
//! Measures the per-sort cost of the no-cache design: every member lookup re-parses its
//! declaring class, so parse throughput bounds how large a class the sorter can handle
//! comfortably.

extern crate classorder;

use classorder::classfile::{ClassSummary, LineMap};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn push_utf8(data: &mut Vec<u8>, value: &str) {
    data.push(1);
    data.extend_from_slice(&(value.len() as u16).to_be_bytes());
    data.extend_from_slice(value.as_bytes());
}

/// Assemble a class with `count` one-instruction methods, each carrying one line record.
fn class_with_methods(count: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
    data.extend_from_slice(&0u16.to_be_bytes());
    data.extend_from_slice(&52u16.to_be_bytes());

    data.extend_from_slice(&(5 + count * 2).to_be_bytes());
    push_utf8(&mut data, "bench/Generated");
    data.push(7);
    data.extend_from_slice(&1u16.to_be_bytes());
    push_utf8(&mut data, "Code");
    push_utf8(&mut data, "LineNumberTable");
    for index in 0..count {
        push_utf8(&mut data, &format!("method{index:04}"));
        push_utf8(&mut data, "()V");
    }

    data.extend_from_slice(&0x0021u16.to_be_bytes());
    data.extend_from_slice(&2u16.to_be_bytes());
    data.extend_from_slice(&0u16.to_be_bytes());
    data.extend_from_slice(&0u16.to_be_bytes());
    data.extend_from_slice(&0u16.to_be_bytes());

    data.extend_from_slice(&count.to_be_bytes());
    for index in 0..count {
        data.extend_from_slice(&0x0001u16.to_be_bytes());
        data.extend_from_slice(&(5 + index * 2).to_be_bytes());
        data.extend_from_slice(&(6 + index * 2).to_be_bytes());
        data.extend_from_slice(&1u16.to_be_bytes()); // one attribute: Code
        data.extend_from_slice(&3u16.to_be_bytes());
        data.extend_from_slice(&25u32.to_be_bytes());
        data.extend_from_slice(&1u16.to_be_bytes()); // max_stack
        data.extend_from_slice(&1u16.to_be_bytes()); // max_locals
        data.extend_from_slice(&1u32.to_be_bytes()); // code_length
        data.push(0xB1);
        data.extend_from_slice(&0u16.to_be_bytes()); // exception_table_length
        data.extend_from_slice(&1u16.to_be_bytes()); // one nested attribute
        data.extend_from_slice(&4u16.to_be_bytes());
        data.extend_from_slice(&6u32.to_be_bytes());
        data.extend_from_slice(&1u16.to_be_bytes()); // one entry
        data.extend_from_slice(&0u16.to_be_bytes());
        data.extend_from_slice(&(index + 1).to_be_bytes());
    }

    data
}

fn bench_summary_small(c: &mut Criterion) {
    let bytes = class_with_methods(16);

    c.bench_function("summary_16_methods", |b| {
        b.iter(|| {
            let summary = ClassSummary::from_bytes(black_box(&bytes)).unwrap();
            black_box(summary)
        });
    });
}

fn bench_summary_large(c: &mut Criterion) {
    let bytes = class_with_methods(1024);

    c.bench_function("summary_1024_methods", |b| {
        b.iter(|| {
            let summary = ClassSummary::from_bytes(black_box(&bytes)).unwrap();
            black_box(summary)
        });
    });
}

fn bench_line_map(c: &mut Criterion) {
    let bytes = class_with_methods(256);

    c.bench_function("line_map_256_methods", |b| {
        b.iter(|| {
            let map = LineMap::from_class(black_box(&bytes)).unwrap();
            black_box(map)
        });
    });
}

criterion_group!(
    benches,
    bench_summary_small,
    bench_summary_large,
    bench_line_map
);
criterion_main!(benches);
