//! The convolution operator and the passes that run it over an image.

use super::{ImageInfo, Kernel, Neighborhood, Pixel, WidePixel};
use core::ops::Range;

/// Weighted sum of `view` against `kernel`, then scaled by the kernel's
/// factor.
///
/// Terms are summed in row-major order so the value handed to the float
/// scale is always the same for the same input.
pub fn convolve(view: &Neighborhood, kernel: &Kernel) -> WidePixel {
    debug_assert_eq!(view.order(), kernel.order());

    let mut acc = WidePixel::default();
    for y in 0..kernel.order() {
        for x in 0..kernel.order() {
            acc += WidePixel::weighted(view.sample(x, y), kernel.weight(x, y));
        }
    }
    acc.scale(kernel.scale());
    acc
}

/// Column and row ranges of the positions that have a full `order`×`order`
/// neighborhood, or `None` when the image is smaller than the kernel.
pub fn interior(info: &ImageInfo, order: usize) -> Option<(Range<usize>, Range<usize>)> {
    if order == 0 || info.width < order || info.height < order {
        return None;
    }
    let skip = order / 2;
    Some((skip..info.width - skip, skip..info.height - skip))
}

/// Convolves the pixel centred on `(x, y)`.
///
/// # Panics
///
/// If `(x, y)` is closer than `kernel.skip()` to an edge.
#[inline]
pub fn convolve_at(
    source: &[Pixel],
    info: &ImageInfo,
    kernel: &Kernel,
    x: usize,
    y: usize,
) -> WidePixel {
    let skip = kernel.skip();
    debug_assert!(x >= skip && x + skip < info.width);
    debug_assert!(y >= skip && y + skip < info.height);

    let base = info.image_offset(x - skip, y - skip);
    let view = Neighborhood::new(info.stride_y, kernel.order(), &source[base..]);
    convolve(&view, kernel)
}

/// Runs `kernel` over every interior pixel of `source`, writing into
/// `destination`.
///
/// Positions within `kernel.skip()` of an edge are not written; they keep
/// whatever `destination` held before the call.
///
/// # Panics
///
/// If either buffer does not hold exactly `info.len()` pixels.
pub fn convolve_image(
    info: &ImageInfo,
    source: &[Pixel],
    destination: &mut [WidePixel],
    kernel: &Kernel,
) {
    assert_eq!(source.len(), info.len());
    assert_eq!(destination.len(), info.len());

    let (xs, ys) = match interior(info, kernel.order()) {
        Some(window) => window,
        None => return,
    };
    for y in ys {
        for x in xs.clone() {
            destination[info.image_offset(x, y)] = convolve_at(source, info, kernel, x, y);
        }
    }
}

/// Quantizes every accumulated pixel into `output`. See [`Pixel::from_wide`].
pub fn squash(destination: &[WidePixel], output: &mut [Pixel]) {
    assert_eq!(destination.len(), output.len());

    for (op, dp) in output.iter_mut().zip(destination) {
        *op = Pixel::from_wide(*dp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::*;

    fn flat(info: &ImageInfo, p: Pixel) -> Vec<Pixel> {
        vec![p; info.len()]
    }

    /// Deterministic noise so neighbouring pixels differ.
    fn noise(info: &ImageInfo) -> Vec<Pixel> {
        let mut state = 0x2545_f491u32;
        (0..info.len())
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                let b = state.to_le_bytes();
                Pixel::rgba(b[0], b[1], b[2], b[3])
            })
            .collect()
    }

    const SENTINEL: WidePixel = WidePixel::new(-7, 1_000, 42, 3);

    #[test]
    fn identity_reproduces_interior() {
        let info = ImageInfo::new(9, 7);
        let source = noise(&info);
        let mut dest = vec![WidePixel::default(); info.len()];
        convolve_image(&info, &source, &mut dest, &IDENTITY);

        let mut out = vec![Pixel::default(); info.len()];
        squash(&dest, &mut out);
        for y in 1..info.height - 1 {
            for x in 1..info.width - 1 {
                let i = info.image_offset(x, y);
                let expected = Pixel { a: 255, ..source[i] };
                assert_eq!(out[i], expected, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn flat_region_accumulates_weight_sum_times_scale() {
        let info = ImageInfo::new(8, 8);
        let c = Pixel::rgba(128, 64, 3, 255);
        let source = flat(&info, c);

        for k in CATALOG.iter() {
            let mut dest = vec![WidePixel::default(); info.len()];
            convolve_image(&info, &source, &mut dest, k);

            let s = k.weight_sum();
            let expect = |v: u8| ((v as i32 * s) as f32 * k.scale()) as i32;
            let expected = WidePixel::new(expect(c.r), expect(c.g), expect(c.b), expect(c.a));
            let centre = info.image_offset(4, 4);
            assert_eq!(dest[centre], expected, "{}", k.label());
        }
    }

    #[test]
    fn flat_gray_blurs_stay_gray() {
        let info = ImageInfo::new(8, 8);
        let source = flat(&info, Pixel::rgba(128, 128, 128, 255));
        for k in [BOX_BLUR, GAUSSIAN_BLUR_3X3, GAUSSIAN_BLUR_5X5, UNSHARP_MASKING_5X5].iter() {
            let mut dest = vec![WidePixel::default(); info.len()];
            convolve_image(&info, &source, &mut dest, k);
            let p = Pixel::from_wide(dest[info.image_offset(3, 3)]);
            assert_eq!(p, Pixel::rgba(128, 128, 128, 255), "{}", k.label());
        }
    }

    #[test]
    fn border_ring_keeps_previous_contents() {
        let info = ImageInfo::new(10, 8);
        let source = noise(&info);

        for k in [BOX_BLUR, UNSHARP_MASKING_5X5].iter() {
            let skip = k.skip();
            let mut dest = vec![SENTINEL; info.len()];
            convolve_image(&info, &source, &mut dest, k);

            for y in 0..info.height {
                for x in 0..info.width {
                    let border = x < skip
                        || x >= info.width - skip
                        || y < skip
                        || y >= info.height - skip;
                    let v = dest[info.image_offset(x, y)];
                    if border {
                        assert_eq!(v, SENTINEL, "{} at ({}, {})", k.label(), x, y);
                    } else {
                        let expected = convolve_at(&source, &info, k, x, y);
                        assert_eq!(v, expected, "{} at ({}, {})", k.label(), x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn border_reuses_values_from_an_earlier_kernel() {
        let info = ImageInfo::new(9, 9);
        let source = noise(&info);
        let mut dest = vec![SENTINEL; info.len()];

        convolve_image(&info, &source, &mut dest, &SHARPEN);
        let after_first = dest.clone();
        convolve_image(&info, &source, &mut dest, &GAUSSIAN_BLUR_5X5);

        // ring at distance 1: written by the 3×3 pass, skipped by the 5×5 pass
        for &(x, y) in [(1, 1), (4, 1), (1, 4), (7, 7), (7, 3)].iter() {
            let i = info.image_offset(x, y);
            assert_ne!(dest[i], SENTINEL);
            assert_eq!(dest[i], after_first[i]);
            assert_eq!(dest[i], convolve_at(&source, &info, &SHARPEN, x, y));
        }
        // outermost ring: nobody wrote it
        for &(x, y) in [(0, 0), (8, 4), (3, 8)].iter() {
            assert_eq!(dest[info.image_offset(x, y)], SENTINEL);
        }
        // centre: the last kernel wins
        let c = info.image_offset(4, 4);
        assert_eq!(dest[c], convolve_at(&source, &info, &GAUSSIAN_BLUR_5X5, 4, 4));
    }

    #[test]
    fn unsharp_mask_sum_is_reproducible() {
        let info = ImageInfo::new(12, 12);
        let source = noise(&info);

        let mut first = vec![WidePixel::default(); info.len()];
        let mut second = vec![WidePixel::default(); info.len()];
        convolve_image(&info, &source, &mut first, &UNSHARP_MASKING_5X5);
        convolve_image(&info, &source, &mut second, &UNSHARP_MASKING_5X5);
        assert_eq!(first, second);
    }

    #[test]
    fn convolve_sums_row_major_then_scales() {
        let info = ImageInfo::new(3, 3);
        let source: Vec<Pixel> = (1..=9u8).map(|v| Pixel::rgba(v, 0, 0, 255)).collect();
        let view = Neighborhood::new(3, 3, &source);
        let k = Kernel::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 0.5, "ramp");

        // 1*1 + 2*2 + ... + 9*9 = 285, halved and truncated
        let v = convolve(&view, &k);
        assert_eq!(v.r, 142);
        assert_eq!(v.g, 0);
        assert_eq!(v.a, (255 * 45) / 2);
        assert_eq!(convolve_at(&source, &info, &k, 1, 1), v);
    }

    #[test]
    fn image_smaller_than_kernel_is_left_alone() {
        let info = ImageInfo::new(4, 4);
        let source = noise(&info);
        let mut dest = vec![SENTINEL; info.len()];
        convolve_image(&info, &source, &mut dest, &GAUSSIAN_BLUR_5X5);
        assert!(dest.iter().all(|&p| p == SENTINEL));
        assert!(interior(&info, 5).is_none());
        assert_eq!(interior(&info, 3), Some((1..3, 1..3)));
    }

    #[test]
    fn edge_detector_output_is_opaque() {
        let info = ImageInfo::new(6, 6);
        let source = noise(&info);
        let mut dest = vec![WidePixel::default(); info.len()];
        let mut out = vec![Pixel::default(); info.len()];
        for k in [EDGE_D, EDGE_L, EDGE_C].iter() {
            convolve_image(&info, &source, &mut dest, k);
            squash(&dest, &mut out);
            assert!(out.iter().all(|p| p.a == 255), "{}", k.label());
        }
    }
}
