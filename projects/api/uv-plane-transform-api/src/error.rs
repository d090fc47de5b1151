//! Error types for plane views and transforms.

use crate::view::PixelFormat;
use thiserror::Error;

/// Errors raised while constructing a plane view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Width or height is zero.
    #[error("Plane dimensions must be nonzero: got {width}x{height}")]
    ZeroDimension {
        /// The width that was provided.
        width: usize,
        /// The height that was provided.
        height: usize,
    },

    /// The row stride is smaller than the row's pixel footprint.
    #[error("Stride too small: stride {stride} < row footprint {row_bytes}")]
    StrideTooSmall {
        /// The stride that was provided.
        stride: usize,
        /// The bytes one row of pixels occupies.
        row_bytes: usize,
    },

    /// The backing slice does not cover the described plane.
    #[error("Buffer too small: needed {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// The required buffer size in bytes.
        needed: usize,
        /// The actual buffer size in bytes.
        actual: usize,
    },

    /// The plane's byte footprint does not fit in `usize`.
    #[error("Plane footprint overflows: {height} rows of stride {stride}")]
    FootprintOverflow {
        /// The stride that was provided.
        stride: usize,
        /// The height that was provided.
        height: usize,
    },
}

/// Errors raised by the transform façade when the supplied views break its
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The planes do not agree on width and height.
    #[error(
        "Plane dimensions mismatch: packed plane is {uv_width}x{uv_height}, \
        planar planes are {u_width}x{u_height} and {v_width}x{v_height}"
    )]
    DimensionsMismatch {
        /// Width of the packed UV plane.
        uv_width: usize,
        /// Height of the packed UV plane.
        uv_height: usize,
        /// Width of the U plane.
        u_width: usize,
        /// Height of the U plane.
        u_height: usize,
        /// Width of the V plane.
        v_width: usize,
        /// Height of the V plane.
        v_height: usize,
    },

    /// A plane carries a different format than the operation expects.
    #[error("Unexpected plane format: expected {expected:?}, got {actual:?}")]
    UnexpectedFormat {
        /// The format the operation expects at this position.
        expected: PixelFormat,
        /// The format the view actually carries.
        actual: PixelFormat,
    },
}
