use crate::{PlaneBuffers, HEIGHT, WIDTH};
use criterion::BenchmarkId;
use std::hint::black_box;
use uv_plane_transform::bench::interleave::{sse2_aligned, sse2_unaligned};

fn bench_sse2_aligned(b: &mut criterion::Bencher, buffers: &mut PlaneBuffers) {
    b.iter(|| unsafe {
        sse2_aligned(
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

fn bench_sse2_unaligned(b: &mut criterion::Bencher, buffers: &mut PlaneBuffers) {
    b.iter(|| unsafe {
        sse2_unaligned(
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
    group.bench_with_input(BenchmarkId::new("sse2 aligned", size), &size, |b, _| {
        bench_sse2_aligned(b, buffers)
    });

    group.bench_with_input(BenchmarkId::new("sse2 unaligned", size), &size, |b, _| {
        bench_sse2_unaligned(b, buffers)
    });
}
