#![no_main]

// Compares the dispatched deinterleave (scalar or SSE2, aligned or
// unaligned, depending on the host and the arbitrary strides) against the
// portable reference implementation.

use libfuzzer_sys::{arbitrary, fuzz_target};
use uv_plane_transform::bench::deinterleave::portable;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct PlaneCase {
    pub width: u8,
    pub height: u8,
    pub uv_pad: u8,
    pub plane_pad: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|case: PlaneCase| {
    let width = case.width as usize % 96;
    let height = case.height as usize % 8;
    if width == 0 || height == 0 {
        return;
    }
    let uv_stride = width * 2 + (case.uv_pad as usize % 32);
    let plane_stride = width + (case.plane_pad as usize % 32);

    let mut uv = vec![0u8; (height - 1) * uv_stride + width * 2];
    if !case.data.is_empty() {
        for (dst, src) in uv.iter_mut().zip(case.data.iter().cycle()) {
            *dst = *src;
        }
    }

    let plane_len = (height - 1) * plane_stride + width;
    let mut u_expected = vec![0u8; plane_len];
    let mut v_expected = vec![0u8; plane_len];
    let mut u_actual = vec![0u8; plane_len];
    let mut v_actual = vec![0u8; plane_len];

    unsafe {
        portable(
            uv.as_ptr(),
            uv_stride,
            width,
            height,
            u_expected.as_mut_ptr(),
            plane_stride,
            v_expected.as_mut_ptr(),
            plane_stride,
        );
        uv_plane_transform::deinterleave_uv(
            uv.as_ptr(),
            uv_stride,
            width,
            height,
            u_actual.as_mut_ptr(),
            plane_stride,
            v_actual.as_mut_ptr(),
            plane_stride,
        );
    }

    assert_eq!(u_expected, u_actual, "U plane diverged from reference");
    assert_eq!(v_expected, v_actual, "V plane diverged from reference");
});
