use super::Pixel;

/// Read-only window into a flat pixel buffer.
///
/// `pixels` starts at the window's top-left corner and `stride` is the row
/// width of the underlying image, so local `(x, y)` maps to
/// `x + y * stride`. Nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a> {
    stride: usize,
    order: usize,
    pixels: &'a [Pixel],
}

impl<'a> Neighborhood<'a> {
    /// `pixels` must cover an `order`×`order` window at `stride`. This is
    /// only checked in debug builds; [`crate::interior`] gives the positions
    /// where it holds.
    #[inline]
    pub fn new(stride: usize, order: usize, pixels: &'a [Pixel]) -> Self {
        debug_assert!(order > 0 && order <= stride);
        debug_assert!(pixels.len() > (order - 1) * (stride + 1));
        Self {
            stride,
            order,
            pixels,
        }
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> Pixel {
        debug_assert!(x < self.order && y < self.order);
        self.pixels[x + y * self.stride]
    }
}
