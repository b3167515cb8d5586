//! Pixel sinks and a bounded coverage counter.
//!
//! The rasterizers only return pixel lists; [`PixelSink`] is the seam where a
//! caller's framebuffer takes over. [`CoverageMask`] is a minimal sink that
//! records how many primitives touched each pixel, which makes overdraw on
//! shared edges visible.

use crate::error::{Error, Result};
use crate::geometry::Pixel;

/// Anything that accepts emitted pixels.
pub trait PixelSink {
    /// Record one pixel.
    fn plot(&mut self, pixel: Pixel);

    /// Record every pixel from an iterator, in order.
    fn plot_all<I>(&mut self, pixels: I)
    where
        I: IntoIterator<Item = Pixel>,
        Self: Sized,
    {
        for pixel in pixels {
            self.plot(pixel);
        }
    }
}

impl PixelSink for Vec<Pixel> {
    fn plot(&mut self, pixel: Pixel) {
        self.push(pixel);
    }
}

/// Per-pixel coverage counts over a `width x height` grid anchored at the
/// origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMask {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Counts in row-major order.
    counts: Vec<u32>,
}

impl CoverageMask {
    /// Create an empty mask.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::coverage::CoverageMask;
    ///
    /// let mask = CoverageMask::new(800, 600).unwrap();
    /// assert_eq!(mask.width(), 800);
    /// assert_eq!(mask.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            counts: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Coverage count at `(x, y)`, or `None` outside the mask.
    #[must_use]
    pub fn count(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.counts[idx])
    }

    /// True when `(x, y)` is inside the mask and covered at least once.
    #[must_use]
    pub fn is_covered(&self, x: i32, y: i32) -> bool {
        self.count(x, y).is_some_and(|c| c > 0)
    }

    /// Pixels covered at least once, row-major.
    #[must_use]
    pub fn covered_pixels(&self) -> Vec<Pixel> {
        self.pixels_where(|c| c > 0)
    }

    /// Pixels covered more than once, row-major.
    #[must_use]
    pub fn overdraw_pixels(&self) -> Vec<Pixel> {
        self.pixels_where(|c| c > 1)
    }

    /// Reset every count to zero.
    pub fn clear(&mut self) {
        self.counts.fill(0);
    }

    fn pixels_where(&self, keep: impl Fn(u32) -> bool) -> Vec<Pixel> {
        let width = self.width as usize;
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| keep(c))
            .map(|(i, _)| Pixel::new((i % width) as i32, (i / width) as i32))
            .collect()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

impl PixelSink for CoverageMask {
    /// Out-of-bounds pixels are dropped.
    fn plot(&mut self, pixel: Pixel) {
        if let Some(idx) = self.index(pixel.x, pixel.y) {
            self.counts[idx] = self.counts[idx].saturating_add(1);
        }
    }
}
