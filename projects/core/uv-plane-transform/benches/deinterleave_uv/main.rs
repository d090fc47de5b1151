use core::{alloc::Layout, time::Duration};
use criterion::{criterion_group, criterion_main, Criterion};
use safe_allocator_api::RawAlloc;
#[allow(unused_imports)]
use uv_plane_transform::cpu_detect::*;

mod portable;
#[cfg(target_arch = "x86_64")]
mod sse2;

pub(crate) const WIDTH: usize = 2048;
pub(crate) const HEIGHT: usize = 2048;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

/// Input/output buffers for deinterleave benchmarks. Contiguous rows, so
/// every pointer and stride satisfies the aligned variant's guarantee.
pub(crate) struct PlaneBuffers {
    pub uv: RawAlloc,
    pub u: RawAlloc,
    pub v: RawAlloc,
}

impl PlaneBuffers {
    pub fn new() -> Self {
        let mut uv = allocate_align_64(WIDTH * 2 * HEIGHT);
        for (index, byte) in uv.as_mut_slice().iter_mut().enumerate() {
            *byte = index as u8;
        }
        Self {
            uv,
            u: allocate_align_64(WIDTH * HEIGHT),
            v: allocate_align_64(WIDTH * HEIGHT),
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Deinterleave UV");
    let size = WIDTH * 2 * HEIGHT; // packed source bytes per call
    let mut buffers = PlaneBuffers::new();

    group.throughput(criterion::Throughput::Bytes(size as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    // Run architecture-specific benchmarks
    #[cfg(target_arch = "x86_64")]
    {
        if has_sse2() {
            sse2::run_benchmarks(&mut group, &mut buffers, size);
        }
    }

    // Run all portable benchmarks
    portable::run_benchmarks(&mut group, &mut buffers, size);

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
