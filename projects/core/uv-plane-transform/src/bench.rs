//! Public re-exports of private implementations for benchmarking.
//!
//! Only compiled with the `bench` feature; not part of the stable API.

/// Deinterleave implementations.
pub mod deinterleave {
    /// Portable reference implementation.
    ///
    /// # Safety
    ///
    /// Same contract as [`crate::deinterleave_uv`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn portable(
        uv_ptr: *const u8,
        uv_stride: usize,
        width: usize,
        height: usize,
        u_ptr: *mut u8,
        u_stride: usize,
        v_ptr: *mut u8,
        v_stride: usize,
    ) {
        crate::deinterleave::portable::u8(
            uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
        )
    }

    /// SSE2 implementation, aligned entry point.
    ///
    /// # Safety
    ///
    /// Same contract as [`crate::deinterleave_uv`], plus: `width >= 16` and
    /// all pointers and strides must be multiples of 16.
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn sse2_aligned(
        uv_ptr: *const u8,
        uv_stride: usize,
        width: usize,
        height: usize,
        u_ptr: *mut u8,
        u_stride: usize,
        v_ptr: *mut u8,
        v_stride: usize,
    ) {
        crate::deinterleave::sse2::aligned(
            uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
        )
    }

    /// SSE2 implementation, unaligned entry point.
    ///
    /// # Safety
    ///
    /// Same contract as [`crate::deinterleave_uv`], plus: `width >= 16`.
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn sse2_unaligned(
        uv_ptr: *const u8,
        uv_stride: usize,
        width: usize,
        height: usize,
        u_ptr: *mut u8,
        u_stride: usize,
        v_ptr: *mut u8,
        v_stride: usize,
    ) {
        crate::deinterleave::sse2::unaligned(
            uv_ptr, uv_stride, width, height, u_ptr, u_stride, v_ptr, v_stride,
        )
    }
}

/// Interleave implementations.
pub mod interleave {
    /// Portable reference implementation.
    ///
    /// # Safety
    ///
    /// Same contract as [`crate::interleave_uv`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn portable(
        u_ptr: *const u8,
        u_stride: usize,
        v_ptr: *const u8,
        v_stride: usize,
        width: usize,
        height: usize,
        uv_ptr: *mut u8,
        uv_stride: usize,
    ) {
        crate::interleave::portable::u8(
            u_ptr, u_stride, v_ptr, v_stride, width, height, uv_ptr, uv_stride,
        )
    }

    /// SSE2 implementation, aligned entry point.
    ///
    /// # Safety
    ///
    /// Same contract as [`crate::interleave_uv`], plus: `width >= 16` and
    /// all pointers and strides must be multiples of 16.
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn sse2_aligned(
        u_ptr: *const u8,
        u_stride: usize,
        v_ptr: *const u8,
        v_stride: usize,
        width: usize,
        height: usize,
        uv_ptr: *mut u8,
        uv_stride: usize,
    ) {
        crate::interleave::sse2::aligned(
            u_ptr, u_stride, v_ptr, v_stride, width, height, uv_ptr, uv_stride,
        )
    }

    /// SSE2 implementation, unaligned entry point.
    ///
    /// # Safety
    ///
    /// Same contract as [`crate::interleave_uv`], plus: `width >= 16`.
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn sse2_unaligned(
        u_ptr: *const u8,
        u_stride: usize,
        v_ptr: *const u8,
        v_stride: usize,
        width: usize,
        height: usize,
        uv_ptr: *mut u8,
        uv_stride: usize,
    ) {
        crate::interleave::sse2::unaligned(
            u_ptr, u_stride, v_ptr, v_stride, width, height, uv_ptr, uv_stride,
        )
    }
}
