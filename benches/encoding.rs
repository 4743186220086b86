use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use float12::{Float12Decoder, Float12Encoder, Uint12Decoder, Uint12Encoder, float12, wrap_lines};
use std::hint::black_box;

fn sample_floats(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| ((i as f64) * 0.618).sin() * 2f64.powi((i % 20) as i32 - 10))
        .collect()
}

fn bench_encode_number(c: &mut Criterion) {
    let values = sample_floats(1024);
    let mut group = c.benchmark_group("encode_number");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("float12", |b| {
        b.iter(|| {
            for &value in &values {
                black_box(float12::encode_number(black_box(value)));
            }
        });
    });
    group.finish();
}

fn bench_encode_float12(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_float12");

    for size in [64, 1024, 16384, 262144].iter() {
        let values = sample_floats(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| Float12Encoder::new(black_box(values)).finish());
        });
    }
    group.finish();
}

fn bench_decode_float12(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_float12");

    for size in [64, 1024, 16384, 262144].iter() {
        let encoded = wrap_lines(&Float12Encoder::new(&sample_floats(*size)).finish(), 76);
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| Float12Decoder::new(black_box(encoded)).finish());
        });
    }
    group.finish();
}

fn bench_suspend_count(c: &mut Criterion) {
    let encoded = Float12Encoder::new(&sample_floats(65536)).finish();
    let mut group = c.benchmark_group("decode_suspend_count");
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    for suspend in [64, 1024, 10240].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(suspend), suspend, |b, &suspend| {
            b.iter(|| {
                Float12Decoder::new(black_box(&encoded))
                    .with_suspend_count(suspend)
                    .finish()
            });
        });
    }
    group.finish();
}

fn bench_uint12(c: &mut Criterion) {
    let values: Vec<u16> = (0..16384).map(|i| (i * 7 % 4096) as u16).collect();
    let encoded = Uint12Encoder::new(&values).finish();
    let mut group = c.benchmark_group("uint12");
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| Uint12Encoder::new(black_box(&values)).finish());
    });
    group.bench_function("decode", |b| {
        b.iter(|| Uint12Decoder::new(black_box(&encoded)).finish());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_number,
    bench_encode_float12,
    bench_decode_float12,
    bench_suspend_count,
    bench_uint12
);
criterion_main!(benches);
