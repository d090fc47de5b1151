#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

pub mod cpu_detect;

mod deinterleave;
mod interleave;
mod safe;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod intrinsics;

#[cfg(feature = "bench")]
pub mod bench;


pub use deinterleave::deinterleave_uv;
pub use interleave::interleave_uv;
pub use safe::{deinterleave_uv_safe, interleave_uv_safe, PlaneValidationError};
