pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
use crate::intrinsics::sse2::{is_sse2_aligned, SSE2_REGISTER_BYTES};

/// Splits a packed UV plane into planar U and V planes using the best
/// implementation for the current CPU.
///
/// The source holds `width` interleaved byte pairs per row (U byte then V
/// byte); each destination receives `width` bytes per row. All three planes
/// advance by their own stride between rows; padding bytes past a row's
/// pixel footprint are never read or written.
///
/// # Safety
///
/// - `uv_ptr` must be valid for reads of `width * 2` bytes in each of
///   `height` rows spaced `uv_stride` bytes apart
/// - `u_ptr` and `v_ptr` must each be valid for writes of `width` bytes in
///   each of `height` rows spaced `u_stride` / `v_stride` bytes apart
/// - the three buffers must not overlap
#[allow(clippy::too_many_arguments)]
#[inline]
pub unsafe fn deinterleave_uv(
    uv_ptr: *const u8,
    uv_stride: usize,
    width: usize,
    height: usize,
    u_ptr: *mut u8,
    u_stride: usize,
    v_ptr: *mut u8,
    v_stride: usize,
) {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        deinterleave_uv_x86(
            uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
        )
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable::u8(
            uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
        )
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[allow(clippy::too_many_arguments)]
#[inline(always)]
unsafe fn deinterleave_uv_x86(
    uv_ptr: *const u8,
    uv_stride: usize,
    width: usize,
    height: usize,
    u_ptr: *mut u8,
    u_stride: usize,
    v_ptr: *mut u8,
    v_stride: usize,
) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    let sse2_usable = crate::cpu_detect::has_sse2();

    #[cfg(feature = "no-runtime-cpu-detection")]
    let sse2_usable = cfg!(target_feature = "sse2");

    // The SSE2 paths need one full register per row; narrower planes go
    // through the scalar reference.
    if sse2_usable && width >= SSE2_REGISTER_BYTES {
        if is_sse2_aligned(uv_ptr as usize)
            && is_sse2_aligned(uv_stride)
            && is_sse2_aligned(u_ptr as usize)
            && is_sse2_aligned(u_stride)
            && is_sse2_aligned(v_ptr as usize)
            && is_sse2_aligned(v_stride)
        {
            sse2::aligned(
                uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
            );
        } else {
            sse2::unaligned(
                uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
            );
        }
        return;
    }

    portable::u8(
        uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
    )
}
