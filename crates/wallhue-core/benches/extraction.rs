//! Benchmarks for wallhue-core extraction operations
//!
//! Run with: cargo bench -p wallhue-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wallhue_core::{compute_dark_hints, select_seeds, ColorHistogram, PixelBuffer};

/// Generate a synthetic histogram with hues spread over the color wheel
fn generate_histogram(colors: u32) -> ColorHistogram {
    (0..colors)
        .map(|i| {
            // Knuth multiplicative hashing scatters the channel values
            let color = i.wrapping_mul(2_654_435_761) & 0x00FF_FFFF;
            (color, i + 1)
        })
        .collect()
}

/// Generate a synthetic ARGB gradient buffer
fn generate_gradient_buffer(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) * 255 / (width + height).max(1)) as u8;
            pixels.push(u32::from_be_bytes([0xFF, r, g, b]));
        }
    }
    PixelBuffer::new(width, height, pixels).expect("dimensions match")
}

fn bench_select_seeds(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_seeds");

    for colors in [16u32, 64, 128] {
        let histogram = generate_histogram(colors);
        group.throughput(Throughput::Elements(colors as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(colors),
            &histogram,
            |b, histogram| b.iter(|| select_seeds(black_box(histogram))),
        );
    }

    group.finish();
}

fn bench_dark_hints(c: &mut Criterion) {
    let mut group = c.benchmark_group("dark_hints");

    let buffer = generate_gradient_buffer(112, 112);
    group.throughput(Throughput::Elements(buffer.len() as u64));
    for dim in [0.0f32, 0.5] {
        group.bench_with_input(BenchmarkId::new("dim", dim), &buffer, |b, buffer| {
            b.iter(|| compute_dark_hints(black_box(buffer), black_box(dim)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_seeds, bench_dark_hints);
criterion_main!(benches);
