//! Square convolution kernels and the fixed catalog applied by the filter.

/// A square matrix of integer weights with a normalisation factor.
///
/// Weights are stored row-major, so the weight at `(x, y)` lives at
/// `x + y * order`. The order is always odd, which gives the kernel a centre
/// and an equal margin of [`Kernel::skip`] pixels on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel<'a> {
    weights: &'a [i32],
    order: usize,
    scale: f32,
    label: &'a str,
}

impl<'a> Kernel<'a> {
    /// # Panics
    ///
    /// If `order` is zero or even, or `weights.len() != order * order`.
    pub const fn new(weights: &'a [i32], order: usize, scale: f32, label: &'a str) -> Self {
        assert!(order % 2 == 1, "kernel order must be odd");
        assert!(weights.len() == order * order, "kernel must hold order² weights");
        Kernel {
            weights,
            order,
            scale,
            label,
        }
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn weights(&self) -> &'a [i32] {
        self.weights
    }

    /// Margin around the centre, `order / 2`.
    #[inline]
    pub fn skip(&self) -> usize {
        self.order / 2
    }

    #[inline]
    pub fn weight(&self, x: usize, y: usize) -> i32 {
        debug_assert!(x < self.order && y < self.order);
        self.weights[x + y * self.order]
    }

    pub fn weight_sum(&self) -> i32 {
        self.weights.iter().sum()
    }
}

#[rustfmt::skip]
pub const IDENTITY: Kernel<'static> = Kernel::new(
    &[0, 0, 0,
      0, 1, 0,
      0, 0, 0],
    3, 1.0, "Identity");

#[rustfmt::skip]
pub const EDGE_D: Kernel<'static> = Kernel::new(
    &[1, 0, -1,
      0, 0, 0,
      -1, 0, 1],
    3, 1.0, "EdgeD");

#[rustfmt::skip]
pub const EDGE_L: Kernel<'static> = Kernel::new(
    &[0, -1, 0,
      -1, 4, -1,
      0, -1, 0],
    3, 1.0, "EdgeL");

#[rustfmt::skip]
pub const EDGE_C: Kernel<'static> = Kernel::new(
    &[-1, -1, -1,
      -1, 8, -1,
      -1, -1, -1],
    3, 1.0, "EdgeC");

#[rustfmt::skip]
pub const SHARPEN: Kernel<'static> = Kernel::new(
    &[0, -1, 0,
      -1, 5, -1,
      0, -1, 0],
    3, 1.0, "Sharpen");

#[rustfmt::skip]
pub const BOX_BLUR: Kernel<'static> = Kernel::new(
    &[1, 1, 1,
      1, 1, 1,
      1, 1, 1],
    3, 1.0 / 9.0, "BoxBlur");

#[rustfmt::skip]
pub const GAUSSIAN_BLUR_3X3: Kernel<'static> = Kernel::new(
    &[1, 2, 1,
      2, 4, 2,
      1, 2, 1],
    3, 1.0 / 16.0, "GaussianBlur_3x3");

#[rustfmt::skip]
pub const GAUSSIAN_BLUR_5X5: Kernel<'static> = Kernel::new(
    &[1, 4, 6, 4, 1,
      4, 16, 24, 16, 4,
      6, 24, 36, 24, 6,
      4, 16, 24, 16, 4,
      1, 4, 6, 4, 1],
    5, 1.0 / 256.0, "GaussianBlur_5x5");

#[rustfmt::skip]
pub const UNSHARP_MASKING_5X5: Kernel<'static> = Kernel::new(
    &[1, 4, 6, 4, 1,
      4, 16, 24, 16, 4,
      6, 24, -476, 24, 6,
      4, 16, 24, 16, 4,
      1, 4, 6, 4, 1],
    5, -1.0 / 256.0, "UnsharpMasking_5x5");

/// Every kernel the filter applies, in application order.
pub static CATALOG: [Kernel<'static>; 9] = [
    IDENTITY,
    EDGE_D,
    EDGE_L,
    EDGE_C,
    SHARPEN,
    BOX_BLUR,
    GAUSSIAN_BLUR_3X3,
    GAUSSIAN_BLUR_5X5,
    UNSHARP_MASKING_5X5,
];

pub fn find(label: &str) -> Option<&'static Kernel<'static>> {
    CATALOG.iter().find(|k| k.label == label)
}
