#![cfg_attr(not(feature = "std"), no_std)]

pub mod convolve;
pub mod kernel;
pub mod view;

pub use convolve::{convolve, convolve_at, convolve_image, interior, squash};
pub use kernel::Kernel;
pub use view::Neighborhood;

use core::ops::AddAssign;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
    pub stride_x: usize,
    pub stride_y: usize,
}

impl ImageInfo {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride_x: 1,
            stride_y: width * 1,
        }
    }

    pub fn image_offset(&self, x: usize, y: usize) -> usize {
        x * self.stride_x + y * self.stride_y
    }

    /// Number of pixels in a tightly packed buffer of this shape.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// RGBA pixel with 8 bits per channel, the layout every decoded image is
/// normalised to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Quantizes an accumulated pixel back into byte range.
    ///
    /// Colour channels saturate to `[0, 255]`. Alpha is always 255: edge
    /// kernels drive the accumulated alpha to zero or below, and that must
    /// not leave the output transparent.
    pub fn from_wide(wide: WidePixel) -> Self {
        Self {
            r: clamp_channel(wide.r),
            g: clamp_channel(wide.g),
            b: clamp_channel(wide.b),
            a: 0xFF,
        }
    }
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 0xFF) as u8
}

/// Accumulator pixel used while convolving.
///
/// The largest magnitude a catalog kernel produces is
/// `order² * 255 * max|weight|`, i.e. `25 * 255 * 476 = 3_034_500` for the
/// 5×5 unsharp mask. That fits an `i32` with room to spare, and stays below
/// 2^24 so converting a channel to `f32` in [`WidePixel::scale`] is exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidePixel {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

impl WidePixel {
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_narrow(p: Pixel) -> Self {
        Self {
            r: p.r as i32,
            g: p.g as i32,
            b: p.b as i32,
            a: p.a as i32,
        }
    }

    /// `p * weight`, with every channel widened before the multiply.
    #[inline]
    pub fn weighted(p: Pixel, weight: i32) -> Self {
        let w = Self::from_narrow(p);
        Self {
            r: w.r * weight,
            g: w.g * weight,
            b: w.b * weight,
            a: w.a * weight,
        }
    }

    /// Multiplies every channel by `factor` in `f32` and truncates toward
    /// zero on the way back.
    #[inline]
    pub fn scale(&mut self, factor: f32) {
        self.r = (self.r as f32 * factor) as i32;
        self.g = (self.g as f32 * factor) as i32;
        self.b = (self.b as f32 * factor) as i32;
        self.a = (self.a as f32 * factor) as i32;
    }
}

impl AddAssign for WidePixel {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
        self.a += rhs.a;
    }
}
