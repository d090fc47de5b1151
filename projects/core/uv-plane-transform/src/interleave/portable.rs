/// Merges planar U and V into a packed UV plane using byte operations.
///
/// Reference implementation: correct for every width (including 0) and any
/// buffer alignment.
///
/// # Safety
///
/// - `u_ptr` and `v_ptr` must each be valid for reads of `width` bytes in
///   each of `height` rows spaced `u_stride` / `v_stride` bytes apart
/// - `uv_ptr` must be valid for writes of `width * 2` bytes in each of
///   `height` rows spaced `uv_stride` bytes apart
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub(crate) unsafe fn u8(
    mut u_ptr: *const u8,
    u_stride: usize,
    mut v_ptr: *const u8,
    v_stride: usize,
    width: usize,
    height: usize,
    mut uv_ptr: *mut u8,
    uv_stride: usize,
) {
    for _row in 0..height {
        let mut offset = 0;
        for col in 0..width {
            *uv_ptr.add(offset) = *u_ptr.add(col);
            *uv_ptr.add(offset + 1) = *v_ptr.add(col);
            offset += 2;
        }

        u_ptr = u_ptr.add(u_stride);
        v_ptr = v_ptr.add(v_stride);
        uv_ptr = uv_ptr.add(uv_stride);
    }
}
