//! Shared SIMD helpers used by the per-operation implementations.

pub(crate) mod sse2;
