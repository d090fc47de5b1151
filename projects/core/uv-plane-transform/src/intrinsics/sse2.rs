//! SSE2 load/store primitives parameterized by the alignment guarantee.
//!
//! The `ALIGNED` const parameter selects `movdqa`-style access, which
//! faults when the address is not a multiple of the register width. The
//! dispatcher proves the guarantee before selecting an aligned entry point.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Bytes in one XMM register. Doubles as the required alignment for the
/// aligned load/store variants and as the minimum width for the SSE2 paths.
pub(crate) const SSE2_REGISTER_BYTES: usize = 16;

/// Returns whether an address or stride satisfies the SSE2 alignment
/// guarantee.
#[inline(always)]
pub(crate) fn is_sse2_aligned(value: usize) -> bool {
    value.is_multiple_of(SSE2_REGISTER_BYTES)
}

/// Loads one XMM register from `src`.
///
/// # Safety
///
/// - `src` must be valid for reads of 16 bytes
/// - when `ALIGNED` is true, `src` must be 16-byte aligned
#[target_feature(enable = "sse2")]
#[inline]
pub(crate) unsafe fn load_128<const ALIGNED: bool>(src: *const u8) -> __m128i {
    if ALIGNED {
        _mm_load_si128(src as *const __m128i)
    } else {
        _mm_loadu_si128(src as *const __m128i)
    }
}

/// Stores one XMM register to `dst`.
///
/// # Safety
///
/// - `dst` must be valid for writes of 16 bytes
/// - when `ALIGNED` is true, `dst` must be 16-byte aligned
#[target_feature(enable = "sse2")]
#[inline]
pub(crate) unsafe fn store_128<const ALIGNED: bool>(dst: *mut u8, value: __m128i) {
    if ALIGNED {
        _mm_store_si128(dst as *mut __m128i, value)
    } else {
        _mm_storeu_si128(dst as *mut __m128i, value)
    }
}
