use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;
use vibration_spectrum::{analyze_recording, AnalysisConfig, RecordingBuffer, Sample};

fn recording(count: usize) -> RecordingBuffer {
    let mut buffer = RecordingBuffer::with_capacity(count);
    for n in 0..count {
        let t = n as f64 / 100.0;
        let sample = Sample::new(
            (2.0 * PI * 10.0 * t).sin(),
            (2.0 * PI * 17.5 * t).sin() * 0.5,
            (2.0 * PI * 3.0 * t).cos(),
            n as u64 * 10,
        );
        buffer
            .push(sample)
            .expect("timestamps are increasing");
    }
    buffer
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_recording");

    for count in [128usize, 1000, 4096] {
        let buffer = recording(count);
        for parallel_axes in [false, true] {
            let config = AnalysisConfig {
                parallel_axes,
                ..AnalysisConfig::default()
            };
            let label = if parallel_axes { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, count), &buffer, |b, buffer| {
                b.iter(|| analyze_recording(black_box(buffer), &config))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
