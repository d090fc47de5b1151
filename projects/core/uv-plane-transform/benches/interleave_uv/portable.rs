use crate::{PlaneBuffers, HEIGHT, WIDTH};
use criterion::BenchmarkId;
use std::hint::black_box;
use uv_plane_transform::bench::interleave::portable;

fn bench_portable(b: &mut criterion::Bencher, buffers: &mut PlaneBuffers) {
    b.iter(|| unsafe {
        portable(
            black_box(buffers.u.as_ptr()),
            black_box(WIDTH),
            black_box(buffers.v.as_ptr()),
            black_box(WIDTH),
            black_box(WIDTH),
            black_box(HEIGHT),
            black_box(buffers.uv.as_mut_ptr()),
            black_box(WIDTH * 2),
        )
    });
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    buffers: &mut PlaneBuffers,
    size: usize,
) {
    group.bench_with_input(BenchmarkId::new("portable", size), &size, |b, _| {
        bench_portable(b, buffers)
    });
}
