//! Borrowed, stride-aware descriptors of 2D pixel planes.
//!
//! A view never owns or allocates memory: it pairs a byte slice with the
//! width/height/stride/format describing how the slice is laid out, and its
//! constructor proves the slice actually covers that layout. Everything
//! downstream can then rely on the plane geometry without re-checking.

use crate::error::ViewError;
use derive_enum_all_values::AllValues;

/// Pixel layout of a plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, AllValues)]
pub enum PixelFormat {
    /// Single-channel 8-bit plane, 1 byte per pixel.
    Gray8,
    /// Interleaved 2-channel 8-bit plane (UV byte pairs), 2 bytes per pixel.
    Uv16,
}

impl PixelFormat {
    /// Bytes one pixel occupies in this format.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Uv16 => 2,
        }
    }
}

/// Checks that `len` bytes cover the described plane. The last row only
/// needs its pixel footprint; padding past it is not required to exist.
fn check_plane(
    len: usize,
    format: PixelFormat,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), ViewError> {
    if width == 0 || height == 0 {
        return Err(ViewError::ZeroDimension { width, height });
    }

    let row_bytes = width
        .checked_mul(format.bytes_per_pixel())
        .ok_or(ViewError::FootprintOverflow { stride, height })?;
    if stride < row_bytes {
        return Err(ViewError::StrideTooSmall { stride, row_bytes });
    }

    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|full_rows| full_rows.checked_add(row_bytes))
        .ok_or(ViewError::FootprintOverflow { stride, height })?;
    if len < needed {
        return Err(ViewError::BufferTooSmall { needed, actual: len });
    }

    Ok(())
}

/// A read-only view of a 2D pixel plane.
#[derive(Debug, Copy, Clone)]
pub struct PlaneView<'data> {
    data: &'data [u8],
    format: PixelFormat,
    width: usize,
    height: usize,
    stride: usize,
}

impl<'data> PlaneView<'data> {
    /// Creates a view of `data` as a `width` x `height` plane of `format`
    /// pixels whose rows start `stride` bytes apart.
    ///
    /// # Errors
    ///
    /// - [`ViewError::ZeroDimension`] if `width` or `height` is zero
    /// - [`ViewError::StrideTooSmall`] if `stride` cannot hold one row
    /// - [`ViewError::BufferTooSmall`] if `data` does not cover the plane
    /// - [`ViewError::FootprintOverflow`] if the plane's byte footprint
    ///   does not fit in `usize`
    pub fn new(
        data: &'data [u8],
        format: PixelFormat,
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, ViewError> {
        check_plane(data.len(), format, width, height, stride)?;
        Ok(Self {
            data,
            format,
            width,
            height,
            stride,
        })
    }

    /// Plane width in pixels.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Plane height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Byte distance between the start of consecutive rows.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel layout of the plane.
    #[inline]
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Pointer to row 0, column 0.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// The pixel bytes of one row, without any stride padding.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        assert!(row < self.height, "row {row} out of bounds");
        &self.data[row * self.stride..][..self.width * self.format.bytes_per_pixel()]
    }
}

/// A mutable view of a 2D pixel plane.
#[derive(Debug)]
pub struct PlaneViewMut<'data> {
    data: &'data mut [u8],
    format: PixelFormat,
    width: usize,
    height: usize,
    stride: usize,
}

impl<'data> PlaneViewMut<'data> {
    /// Creates a mutable view of `data` as a `width` x `height` plane of
    /// `format` pixels whose rows start `stride` bytes apart.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PlaneView::new`].
    pub fn new(
        data: &'data mut [u8],
        format: PixelFormat,
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, ViewError> {
        check_plane(data.len(), format, width, height, stride)?;
        Ok(Self {
            data,
            format,
            width,
            height,
            stride,
        })
    }

    /// Plane width in pixels.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Plane height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Byte distance between the start of consecutive rows.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel layout of the plane.
    #[inline]
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Pointer to row 0, column 0.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Mutable pointer to row 0, column 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.data.as_mut_ptr()
    }

    /// The pixel bytes of one row, without any stride padding.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        assert!(row < self.height, "row {row} out of bounds");
        &self.data[row * self.stride..][..self.width * self.format.bytes_per_pixel()]
    }

    /// The mutable pixel bytes of one row, without any stride padding.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        assert!(row < self.height, "row {row} out of bounds");
        &mut self.data[row * self.stride..][..self.width * self.format.bytes_per_pixel()]
    }
}
