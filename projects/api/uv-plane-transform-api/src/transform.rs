//! View-level transform façade.
//!
//! Validates that the supplied views agree on dimensions and carry the
//! expected formats, then extracts raw pointers and strides and forwards to
//! the dispatcher in the core crate. Validation cost is paid here, once per
//! call, never inside the per-row loops.

use crate::error::TransformError;
use crate::view::{PixelFormat, PlaneView, PlaneViewMut};
use likely_stable::unlikely;

fn check_dimensions(
    uv_width: usize,
    uv_height: usize,
    u: (usize, usize),
    v: (usize, usize),
) -> Result<(), TransformError> {
    if unlikely(
        u.0 != uv_width || u.1 != uv_height || v.0 != uv_width || v.1 != uv_height,
    ) {
        return Err(TransformError::DimensionsMismatch {
            uv_width,
            uv_height,
            u_width: u.0,
            u_height: u.1,
            v_width: v.0,
            v_height: v.1,
        });
    }
    Ok(())
}

fn check_format(expected: PixelFormat, actual: PixelFormat) -> Result<(), TransformError> {
    if unlikely(actual != expected) {
        return Err(TransformError::UnexpectedFormat { expected, actual });
    }
    Ok(())
}

/// Splits a packed UV plane into planar U and V planes.
///
/// `uv` must be a [`PixelFormat::Uv16`] plane; `u` and `v` must be
/// [`PixelFormat::Gray8`] planes of the same width and height.
///
/// # Errors
///
/// - [`TransformError::DimensionsMismatch`] if the three planes do not
///   agree on width and height
/// - [`TransformError::UnexpectedFormat`] if a plane carries the wrong
///   format
pub fn deinterleave_uv(
    uv: &PlaneView<'_>,
    u: &mut PlaneViewMut<'_>,
    v: &mut PlaneViewMut<'_>,
) -> Result<(), TransformError> {
    check_dimensions(
        uv.width(),
        uv.height(),
        (u.width(), u.height()),
        (v.width(), v.height()),
    )?;
    check_format(PixelFormat::Uv16, uv.format())?;
    check_format(PixelFormat::Gray8, u.format())?;
    check_format(PixelFormat::Gray8, v.format())?;

    // SAFETY: view construction proved each slice covers its plane, so every
    // row access lands in bounds; the `&`/`&mut` borrows rule out overlap.
    unsafe {
        uv_plane_transform::deinterleave_uv(
            uv.as_ptr(),
            uv.stride(),
            uv.width(),
            uv.height(),
            u.as_mut_ptr(),
            u.stride(),
            v.as_mut_ptr(),
            v.stride(),
        );
    }

    Ok(())
}

/// Merges planar U and V planes into one packed UV plane.
///
/// `u` and `v` must be [`PixelFormat::Gray8`] planes; `uv` must be a
/// [`PixelFormat::Uv16`] plane of the same width and height.
///
/// # Errors
///
/// - [`TransformError::DimensionsMismatch`] if the three planes do not
///   agree on width and height
/// - [`TransformError::UnexpectedFormat`] if a plane carries the wrong
///   format
pub fn interleave_uv(
    u: &PlaneView<'_>,
    v: &PlaneView<'_>,
    uv: &mut PlaneViewMut<'_>,
) -> Result<(), TransformError> {
    check_dimensions(
        uv.width(),
        uv.height(),
        (u.width(), u.height()),
        (v.width(), v.height()),
    )?;
    check_format(PixelFormat::Uv16, uv.format())?;
    check_format(PixelFormat::Gray8, u.format())?;
    check_format(PixelFormat::Gray8, v.format())?;

    // SAFETY: view construction proved each slice covers its plane, so every
    // row access lands in bounds; the `&`/`&mut` borrows rule out overlap.
    unsafe {
        uv_plane_transform::interleave_uv(
            u.as_ptr(),
            u.stride(),
            v.as_ptr(),
            v.stride(),
            uv.width(),
            uv.height(),
            uv.as_mut_ptr(),
            uv.stride(),
        );
    }

    Ok(())
}
