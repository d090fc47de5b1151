use crate::intrinsics::sse2::{is_sse2_aligned, load_128, store_128, SSE2_REGISTER_BYTES};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE2 worker merging 16 columns of U and V (32 packed output bytes) per
/// iteration.
///
/// `_mm_unpacklo_epi8`/`_mm_unpackhi_epi8` interleave the two source
/// registers byte by byte, producing the packed pair layout directly. Tail
/// handling mirrors the deinterleave direction: one extra full-width,
/// always-unaligned iteration over the last 16 columns, idempotently
/// rewriting up to 15 columns already produced by the body loop.
///
/// # Safety
///
/// - `width` must be at least 16
/// - `u_ptr` and `v_ptr` must each be valid for reads of `width` bytes in
///   each of `height` rows spaced `u_stride` / `v_stride` bytes apart
/// - `uv_ptr` must be valid for writes of `width * 2` bytes in each of
///   `height` rows spaced `uv_stride` bytes apart
/// - when `ALIGNED` is true, all three base pointers and all three strides
///   must be multiples of 16
#[allow(clippy::too_many_arguments)]
#[target_feature(enable = "sse2")]
unsafe fn interleave_uv<const ALIGNED: bool>(
    mut u_ptr: *const u8,
    u_stride: usize,
    mut v_ptr: *const u8,
    v_stride: usize,
    width: usize,
    height: usize,
    mut uv_ptr: *mut u8,
    uv_stride: usize,
) {
    debug_assert!(width >= SSE2_REGISTER_BYTES, "width must be >= 16");
    if ALIGNED {
        debug_assert!(
            is_sse2_aligned(u_ptr as usize)
                && is_sse2_aligned(u_stride)
                && is_sse2_aligned(v_ptr as usize)
                && is_sse2_aligned(v_stride)
                && is_sse2_aligned(uv_ptr as usize)
                && is_sse2_aligned(uv_stride),
            "aligned variant requires 16-byte aligned pointers and strides"
        );
    }

    let body_width = width - (width % SSE2_REGISTER_BYTES);
    let tail = width - body_width;

    for _row in 0..height {
        let mut col = 0;
        let mut offset = 0;
        while col < body_width {
            let u0 = load_128::<ALIGNED>(u_ptr.add(col));
            let v0 = load_128::<ALIGNED>(v_ptr.add(col));
            store_128::<ALIGNED>(uv_ptr.add(offset), _mm_unpacklo_epi8(u0, v0));
            store_128::<ALIGNED>(
                uv_ptr.add(offset + SSE2_REGISTER_BYTES),
                _mm_unpackhi_epi8(u0, v0),
            );
            col += SSE2_REGISTER_BYTES;
            offset += 2 * SSE2_REGISTER_BYTES;
        }

        if tail != 0 {
            let col = width - SSE2_REGISTER_BYTES;
            let offset = 2 * col;
            let u0 = load_128::<false>(u_ptr.add(col));
            let v0 = load_128::<false>(v_ptr.add(col));
            store_128::<false>(uv_ptr.add(offset), _mm_unpacklo_epi8(u0, v0));
            store_128::<false>(
                uv_ptr.add(offset + SSE2_REGISTER_BYTES),
                _mm_unpackhi_epi8(u0, v0),
            );
        }

        u_ptr = u_ptr.add(u_stride);
        v_ptr = v_ptr.add(v_stride);
        uv_ptr = uv_ptr.add(uv_stride);
    }
}

/// Aligned-access entry point.
///
/// # Safety
///
/// Same contract as the unaligned variant, plus: all three base pointers
/// and all three strides must be multiples of 16.
#[allow(clippy::too_many_arguments)]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn aligned(
    u_ptr: *const u8,
    u_stride: usize,
    v_ptr: *const u8,
    v_stride: usize,
    width: usize,
    height: usize,
    uv_ptr: *mut u8,
    uv_stride: usize,
) {
    interleave_uv::<true>(
        u_ptr, u_stride, v_ptr, v_stride, width, height, uv_ptr, uv_stride,
    )
}

/// Unaligned-access entry point.
///
/// # Safety
///
/// - `width` must be at least 16
/// - `u_ptr` and `v_ptr` must each be valid for reads of `width` bytes in
///   each of `height` rows spaced `u_stride` / `v_stride` bytes apart
/// - `uv_ptr` must be valid for writes of `width * 2` bytes in each of
///   `height` rows spaced `uv_stride` bytes apart
#[allow(clippy::too_many_arguments)]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn unaligned(
    u_ptr: *const u8,
    u_stride: usize,
    v_ptr: *const u8,
    v_stride: usize,
    width: usize,
    height: usize,
    uv_ptr: *mut u8,
    uv_stride: usize,
) {
    interleave_uv::<false>(
        u_ptr, u_stride, v_ptr, v_stride, width, height, uv_ptr, uv_stride,
    )
}
