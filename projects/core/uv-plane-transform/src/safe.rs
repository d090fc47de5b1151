//! Safe slice-based wrappers over the raw pointer operations.
//!
//! These validate that every slice actually covers the plane described by
//! its width/height/stride before handing the raw pointers to the
//! dispatcher. Validation runs once per call, outside the hot loops.

use thiserror::Error;

/// Validation errors for the slice-based plane operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaneValidationError {
    /// A row stride is smaller than the row's pixel footprint.
    #[error("Stride too small: stride {stride} < row footprint {row_bytes}")]
    StrideTooSmall {
        /// The stride that was provided.
        stride: usize,
        /// The bytes one row of pixels occupies.
        row_bytes: usize,
    },

    /// A buffer is too small to hold the plane it was passed for.
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

/// Checks that `len` bytes cover a `width` x `height` plane of
/// `bytes_per_pixel`-sized pixels with the given row stride. Padding past
/// the last row's pixel footprint is not required to exist.
fn check_plane(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bytes_per_pixel: usize,
) -> Result<(), PlaneValidationError> {
    let row_bytes = width
        .checked_mul(bytes_per_pixel)
        .ok_or(PlaneValidationError::FootprintOverflow { stride, height })?;
    if stride < row_bytes {
        return Err(PlaneValidationError::StrideTooSmall { stride, row_bytes });
    }

    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|full_rows| full_rows.checked_add(row_bytes))
        .ok_or(PlaneValidationError::FootprintOverflow { stride, height })?;
    if len < needed {
        return Err(PlaneValidationError::BufferTooSmall { needed, actual: len });
    }

    Ok(())
}

/// Splits a packed UV plane into planar U and V planes.
///
/// Safe wrapper over [`crate::deinterleave_uv`]: validates stride
/// sufficiency and the byte footprint of all three slices, then dispatches.
/// A zero `width` or `height` is a no-op.
///
/// # Errors
///
/// - [`PlaneValidationError::StrideTooSmall`] if a stride cannot hold one
///   row of pixels
/// - [`PlaneValidationError::BufferTooSmall`] if a slice does not cover its
///   plane
/// - [`PlaneValidationError::FootprintOverflow`] if a plane's byte
///   footprint does not fit in `usize`
#[allow(clippy::too_many_arguments)]
pub fn deinterleave_uv_safe(
    uv: &[u8],
    u: &mut [u8],
    v: &mut [u8],
    width: usize,
    height: usize,
    uv_stride: usize,
    u_stride: usize,
    v_stride: usize,
) -> Result<(), PlaneValidationError> {
    if width == 0 || height == 0 {
        return Ok(());
    }

    check_plane(uv.len(), width, height, uv_stride, 2)?;
    check_plane(u.len(), width, height, u_stride, 1)?;
    check_plane(v.len(), width, height, v_stride, 1)?;

    // SAFETY: each slice covers (height - 1) * stride + row bytes, so every
    // row access lands inside its slice; `&`/`&mut` borrows rule out overlap.
    unsafe {
        crate::deinterleave_uv(
            uv.as_ptr(),
            uv_stride,
            width,
            height,
            u.as_mut_ptr(),
            u_stride,
            v.as_mut_ptr(),
            v_stride,
        );
    }

    Ok(())
}

/// Merges planar U and V planes into one packed UV plane.
///
/// Safe wrapper over [`crate::interleave_uv`]: validates stride sufficiency
/// and the byte footprint of all three slices, then dispatches. A zero
/// `width` or `height` is a no-op.
///
/// # Errors
///
/// - [`PlaneValidationError::StrideTooSmall`] if a stride cannot hold one
///   row of pixels
/// - [`PlaneValidationError::BufferTooSmall`] if a slice does not cover its
///   plane
/// - [`PlaneValidationError::FootprintOverflow`] if a plane's byte
///   footprint does not fit in `usize`
#[allow(clippy::too_many_arguments)]
pub fn interleave_uv_safe(
    u: &[u8],
    v: &[u8],
    uv: &mut [u8],
    width: usize,
    height: usize,
    u_stride: usize,
    v_stride: usize,
    uv_stride: usize,
) -> Result<(), PlaneValidationError> {
    if width == 0 || height == 0 {
        return Ok(());
    }

    check_plane(u.len(), width, height, u_stride, 1)?;
    check_plane(v.len(), width, height, v_stride, 1)?;
    check_plane(uv.len(), width, height, uv_stride, 2)?;

    // SAFETY: each slice covers (height - 1) * stride + row bytes, so every
    // row access lands inside its slice; `&`/`&mut` borrows rule out overlap.
    unsafe {
        crate::interleave_uv(
            u.as_ptr(),
            u_stride,
            v.as_ptr(),
            v_stride,
            width,
            height,
            uv.as_mut_ptr(),
            uv_stride,
        );
    }

    Ok(())
}
