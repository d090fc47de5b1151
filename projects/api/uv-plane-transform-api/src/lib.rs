#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod error;
mod transform;
mod view;

pub use error::{TransformError, ViewError};
pub use transform::{deinterleave_uv, interleave_uv};
pub use view::{PixelFormat, PlaneView, PlaneViewMut};
