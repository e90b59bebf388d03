//! Benchmarks for the construction pipeline.
//!
//! Measures the ASCII scanner, the UTF-8 validator, and the repairing
//! constructor across content types and sizes.
//!
//! ## Content Types
//!
//! - **ASCII**: Pure 7-bit content (scanner fast path, validator skipped)
//! - **Mixed UTF-8**: Realistic mix of ASCII and multi-byte scalars
//! - **CJK Text**: Predominantly 3-byte sequences
//! - **Damaged**: Mixed content with sparse invalid bytes (repair path)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use textly::{is_ascii, validate_utf8, Text};

const SIZES: [usize; 4] = [1024, 16 * 1024, 256 * 1024, 4 * 1024 * 1024];

/// Generate pure ASCII content of the specified size.
fn generate_ascii(size: usize) -> Vec<u8> {
    let pattern =
        b"The quick brown fox jumps over the lazy dog. 0123456789!@#$%^&*()_+-=[]{}|;':\",./<>?\n";
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        let chunk = &pattern[..remaining.min(pattern.len())];
        result.extend_from_slice(chunk);
    }
    result
}

/// Generate mixed UTF-8 content (ASCII with occasional multi-byte).
fn generate_mixed(size: usize) -> Vec<u8> {
    let pattern = "Hello, world! Café résumé naïve über. 日本語 中文 한국어. Emoji: 🎉🚀💻.\n";
    let pattern_bytes = pattern.as_bytes();
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        if remaining >= pattern_bytes.len() {
            result.extend_from_slice(pattern_bytes);
        } else {
            // Pad with ASCII to avoid splitting a multi-byte sequence
            result.extend(std::iter::repeat(b'A').take(remaining));
        }
    }
    result.truncate(size);
    result
}

/// Generate predominantly 3-byte content (CJK characters).
fn generate_cjk(size: usize) -> Vec<u8> {
    let cjk = "日本語中文韓國語漢字假名平仮名片仮名ひらがなカタカナ한글조선어";
    let cjk_bytes = cjk.as_bytes();
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        if remaining >= cjk_bytes.len() {
            result.extend_from_slice(cjk_bytes);
        } else {
            result.extend(std::iter::repeat(b'X').take(remaining));
        }
    }
    result.truncate(size);
    result
}

/// Generate mixed content with an invalid byte every ~1KB.
fn generate_damaged(size: usize) -> Vec<u8> {
    let mut data = generate_mixed(size);
    let mut pos = 512;
    while pos < data.len() {
        data[pos] = 0xFF;
        pos += 1024;
    }
    data
}

fn format_size(size: usize) -> String {
    if size >= 1024 * 1024 {
        format!("{}MB", size / (1024 * 1024))
    } else {
        format!("{}KB", size / 1024)
    }
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_ascii");

    for size in SIZES {
        let data = generate_ascii(size);
        let size_name = format_size(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&size_name), &data, |b, data| {
            b.iter(|| is_ascii(black_box(data)));
        });
    }

    group.finish();
}

fn bench_validate_ascii(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_ascii");

    for size in SIZES {
        let data = generate_ascii(size);
        let size_name = format_size(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&size_name), &data, |b, data| {
            b.iter(|| validate_utf8(black_box(data)));
        });
    }

    group.finish();
}

fn bench_validate_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_mixed");

    for size in SIZES {
        let data = generate_mixed(size);
        let size_name = format_size(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&size_name), &data, |b, data| {
            b.iter(|| validate_utf8(black_box(data)));
        });
    }

    group.finish();
}

fn bench_validate_cjk(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_cjk");

    for size in SIZES {
        let data = generate_cjk(size);
        let size_name = format_size(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&size_name), &data, |b, data| {
            b.iter(|| validate_utf8(black_box(data)));
        });
    }

    group.finish();
}

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair_damaged");

    for size in SIZES {
        let data = generate_damaged(size);
        let size_name = format_size(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&size_name), &data, |b, data| {
            b.iter(|| Text::from_utf8_repairing(black_box(data)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scan,
    bench_validate_ascii,
    bench_validate_mixed,
    bench_validate_cjk,
    bench_repair,
);
criterion_main!(benches);
