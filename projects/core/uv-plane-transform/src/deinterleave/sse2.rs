use crate::intrinsics::sse2::{is_sse2_aligned, load_128, store_128, SSE2_REGISTER_BYTES};
#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Packs the even-indexed bytes of two source registers into one register.
///
/// `uv0` and `uv1` together hold 16 interleaved UV byte pairs. Masking each
/// 16-bit lane with `0x00FF` keeps the U byte and zero-extends it; the
/// saturating pack then narrows both registers into 16 consecutive U bytes
/// (`uv0`'s half first). Values never exceed 255, so saturation never fires.
#[target_feature(enable = "sse2")]
#[inline]
unsafe fn even_bytes(uv0: __m128i, uv1: __m128i) -> __m128i {
    let low_byte_mask = _mm_set1_epi16(0x00FF);
    _mm_packus_epi16(
        _mm_and_si128(uv0, low_byte_mask),
        _mm_and_si128(uv1, low_byte_mask),
    )
}

/// Packs the odd-indexed bytes of two source registers into one register.
///
/// Shifting each register right by one byte moves every V byte into the
/// even position, reducing the problem to [`even_bytes`].
#[target_feature(enable = "sse2")]
#[inline]
unsafe fn odd_bytes(uv0: __m128i, uv1: __m128i) -> __m128i {
    even_bytes(_mm_srli_si128::<1>(uv0), _mm_srli_si128::<1>(uv1))
}

/// SSE2 worker processing 16 output columns (32 source bytes) per iteration.
///
/// Widths that are not a multiple of 16 are finished by one extra
/// full-width iteration over the last 16 columns of the row. That chunk
/// overlaps the body loop by up to 15 columns; the recomputed values are
/// bit-identical to the ones already stored, so the rewrite is idempotent
/// and no access ever lands outside `[0, width)` of any buffer. The tail
/// chunk's offset carries no alignment guarantee, so it always uses
/// unaligned access.
///
/// # Safety
///
/// - `width` must be at least 16
/// - `uv_ptr` must be valid for reads of `width * 2` bytes in each of
///   `height` rows spaced `uv_stride` bytes apart
/// - `u_ptr` and `v_ptr` must each be valid for writes of `width` bytes in
///   each of `height` rows spaced `u_stride` / `v_stride` bytes apart
/// - when `ALIGNED` is true, all three base pointers and all three strides
///   must be multiples of 16
#[allow(clippy::too_many_arguments)]
#[target_feature(enable = "sse2")]
unsafe fn deinterleave_uv<const ALIGNED: bool>(
    mut uv_ptr: *const u8,
    uv_stride: usize,
    width: usize,
    height: usize,
    mut u_ptr: *mut u8,
    u_stride: usize,
    mut v_ptr: *mut u8,
    v_stride: usize,
) {
    debug_assert!(width >= SSE2_REGISTER_BYTES, "width must be >= 16");
    if ALIGNED {
        debug_assert!(
            is_sse2_aligned(uv_ptr as usize)
                && is_sse2_aligned(uv_stride)
                && is_sse2_aligned(u_ptr as usize)
                && is_sse2_aligned(u_stride)
                && is_sse2_aligned(v_ptr as usize)
                && is_sse2_aligned(v_stride),
            "aligned variant requires 16-byte aligned pointers and strides"
        );
    }

    let body_width = width - (width % SSE2_REGISTER_BYTES);
    let tail = width - body_width;

    for _row in 0..height {
        let mut col = 0;
        let mut offset = 0;
        while col < body_width {
            let uv0 = load_128::<ALIGNED>(uv_ptr.add(offset));
            let uv1 = load_128::<ALIGNED>(uv_ptr.add(offset + SSE2_REGISTER_BYTES));
            store_128::<ALIGNED>(u_ptr.add(col), even_bytes(uv0, uv1));
            store_128::<ALIGNED>(v_ptr.add(col), odd_bytes(uv0, uv1));
            col += SSE2_REGISTER_BYTES;
            offset += 2 * SSE2_REGISTER_BYTES;
        }

        if tail != 0 {
            let col = width - SSE2_REGISTER_BYTES;
            let offset = 2 * col;
            let uv0 = load_128::<false>(uv_ptr.add(offset));
            let uv1 = load_128::<false>(uv_ptr.add(offset + SSE2_REGISTER_BYTES));
            store_128::<false>(u_ptr.add(col), even_bytes(uv0, uv1));
            store_128::<false>(v_ptr.add(col), odd_bytes(uv0, uv1));
        }

        uv_ptr = uv_ptr.add(uv_stride);
        u_ptr = u_ptr.add(u_stride);
        v_ptr = v_ptr.add(v_stride);
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
    uv_ptr: *const u8,
    uv_stride: usize,
    width: usize,
    height: usize,
    u_ptr: *mut u8,
    u_stride: usize,
    v_ptr: *mut u8,
    v_stride: usize,
) {
    deinterleave_uv::<true>(
        uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
    )
}

/// Unaligned-access entry point.
///
/// # Safety
///
/// - `width` must be at least 16
/// - `uv_ptr` must be valid for reads of `width * 2` bytes in each of
///   `height` rows spaced `uv_stride` bytes apart
/// - `u_ptr` and `v_ptr` must each be valid for writes of `width` bytes in
///   each of `height` rows spaced `u_stride` / `v_stride` bytes apart
#[allow(clippy::too_many_arguments)]
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn unaligned(
    uv_ptr: *const u8,
    uv_stride: usize,
    width: usize,
    height: usize,
    u_ptr: *mut u8,
    u_stride: usize,
    v_ptr: *mut u8,
    v_stride: usize,
) {
    deinterleave_uv::<false>(
        uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
    )
}
