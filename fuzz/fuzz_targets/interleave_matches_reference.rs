#![no_main]

// Compares the dispatched interleave against the portable reference
// implementation.

use libfuzzer_sys::{arbitrary, fuzz_target};
use uv_plane_transform::bench::interleave::portable;

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

    let plane_len = (height - 1) * plane_stride + width;
    let mut u = vec![0u8; plane_len];
    let mut v = vec![0u8; plane_len];
    if !case.data.is_empty() {
        for (dst, src) in u.iter_mut().zip(case.data.iter().cycle()) {
            *dst = *src;
        }
        for (dst, src) in v.iter_mut().zip(case.data.iter().rev().cycle()) {
            *dst = *src;
        }
    }

    let uv_len = (height - 1) * uv_stride + width * 2;
    let mut uv_expected = vec![0u8; uv_len];
    let mut uv_actual = vec![0u8; uv_len];

    unsafe {
        portable(
            u.as_ptr(),
            plane_stride,
            v.as_ptr(),
            plane_stride,
            width,
            height,
            uv_expected.as_mut_ptr(),
            uv_stride,
        );
        uv_plane_transform::interleave_uv(
            u.as_ptr(),
            plane_stride,
            v.as_ptr(),
            plane_stride,
            width,
            height,
            uv_actual.as_mut_ptr(),
            uv_stride,
        );
    }

    assert_eq!(uv_expected, uv_actual, "UV plane diverged from reference");
});
