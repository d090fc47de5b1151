//! Runtime CPU feature detection.
//!
//! Each flag is computed on first query and cached in process-wide state
//! that is never written again, so repeated calls cost an atomic load.
//! The answers are stable for the lifetime of the process.

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod imp {
    cpufeatures::new!(cpuid_sse2, "sse2");
    cpufeatures::new!(cpuid_avx2, "avx2");

    /// Returns whether the current CPU supports SSE2 instructions.
    #[inline]
    pub fn has_sse2() -> bool {
        cpuid_sse2::get()
    }

    /// Returns whether the current CPU supports AVX2 instructions.
    #[inline]
    pub fn has_avx2() -> bool {
        cpuid_avx2::get()
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
mod imp {
    /// Returns whether the current CPU supports SSE2 instructions.
    #[inline]
    pub fn has_sse2() -> bool {
        false
    }

    /// Returns whether the current CPU supports AVX2 instructions.
    #[inline]
    pub fn has_avx2() -> bool {
        false
    }
}

pub use imp::{has_avx2, has_sse2};
