/// Splits a packed UV plane into planar U and V using byte operations.
///
/// Reference implementation: correct for every width (including 0) and any
/// buffer alignment. All other implementations must match its output
/// byte for byte.
///
/// # Safety
///
/// - `uv_ptr` must be valid for reads of `width * 2` bytes in each of
///   `height` rows spaced `uv_stride` bytes apart
/// - `u_ptr` and `v_ptr` must each be valid for writes of `width` bytes in
///   each of `height` rows spaced `u_stride` / `v_stride` bytes apart
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub(crate) unsafe fn u8(
    mut uv_ptr: *const u8,
    uv_stride: usize,
    width: usize,
    height: usize,
    mut u_ptr: *mut u8,
    u_stride: usize,
    mut v_ptr: *mut u8,
    v_stride: usize,
) {
    for _row in 0..height {
        let mut offset = 0;
        for col in 0..width {
            *u_ptr.add(col) = *uv_ptr.add(offset);
            *v_ptr.add(col) = *uv_ptr.add(offset + 1);
            offset += 2;
        }

        uv_ptr = uv_ptr.add(uv_stride);
        u_ptr = u_ptr.add(u_stride);
        v_ptr = v_ptr.add(v_stride);
    }
}
