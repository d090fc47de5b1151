#![no_main]

// Interleaves two arbitrary planar buffers into a packed plane, splits the
// packed plane back apart through the safe view API, and asserts the
// original planes come back byte for byte.

use libfuzzer_sys::{arbitrary, fuzz_target};
use uv_plane_transform_api::{
    deinterleave_uv, interleave_uv, PixelFormat, PlaneView, PlaneViewMut,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct RoundtripCase {
    pub width: u8,
    pub height: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|case: RoundtripCase| {
    let width = case.width as usize % 96;
    let height = case.height as usize % 8;
    if width == 0 || height == 0 {
        return;
    }

    let mut u_original = vec![0u8; width * height];
    let mut v_original = vec![0u8; width * height];
    if !case.data.is_empty() {
        for (dst, src) in u_original.iter_mut().zip(case.data.iter().cycle()) {
            *dst = *src;
        }
        for (dst, src) in v_original.iter_mut().zip(case.data.iter().rev().cycle()) {
            *dst = *src;
        }
    }

    let mut packed = vec![0u8; width * 2 * height];
    {
        let u = PlaneView::new(&u_original, PixelFormat::Gray8, width, height, width).unwrap();
        let v = PlaneView::new(&v_original, PixelFormat::Gray8, width, height, width).unwrap();
        let mut uv =
            PlaneViewMut::new(&mut packed, PixelFormat::Uv16, width, height, width * 2).unwrap();
        interleave_uv(&u, &v, &mut uv).unwrap();
    }

    let mut u_rebuilt = vec![0u8; width * height];
    let mut v_rebuilt = vec![0u8; width * height];
    {
        let uv = PlaneView::new(&packed, PixelFormat::Uv16, width, height, width * 2).unwrap();
        let mut u =
            PlaneViewMut::new(&mut u_rebuilt, PixelFormat::Gray8, width, height, width).unwrap();
        let mut v =
            PlaneViewMut::new(&mut v_rebuilt, PixelFormat::Gray8, width, height, width).unwrap();
        deinterleave_uv(&uv, &mut u, &mut v).unwrap();
    }

    assert_eq!(u_original, u_rebuilt, "U plane did not roundtrip");
    assert_eq!(v_original, v_rebuilt, "V plane did not roundtrip");
});
