//! Rasterizer configuration.
//!
//! [`RasterConfig`] bundles the strategy selectors with the degenerate
//! handling tolerances so a pipeline can choose its algorithms once and pass
//! geometry through a single value.
//!
//! ```
//! use trueno_raster::prelude::*;
//!
//! let config = RasterConfig::new()
//!     .line_algorithm(LineAlgorithm::Bresenham)
//!     .triangle_algorithm(TriangleAlgorithm::Scanline);
//!
//! let tri = Triangle::new(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 4.0),
//! );
//! assert_eq!(config.rasterize_triangle(&tri).len(), 15);
//! ```

use crate::error::Result;
use crate::geometry::{Pixel, SegmentLike, TriangleLike};
use crate::predicates::Tolerances;
use crate::raster::{LineAlgorithm, TriangleAlgorithm};

/// Strategy selection and tolerances for a rasterization pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterConfig {
    /// Line strategy.
    pub line: LineAlgorithm,
    /// Triangle strategy.
    pub triangle: TriangleAlgorithm,
    /// Degenerate-triangle tolerances.
    pub tolerances: Tolerances,
}

impl RasterConfig {
    /// Defaults: DDA lines, bounding-box triangles, default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line strategy.
    #[must_use]
    pub fn line_algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.line = algorithm;
        self
    }

    /// Set the triangle strategy.
    #[must_use]
    pub fn triangle_algorithm(mut self, algorithm: TriangleAlgorithm) -> Self {
        self.triangle = algorithm;
        self
    }

    /// Set the tolerances.
    #[must_use]
    pub fn tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTolerance`] for unusable tolerances.
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTolerance`] for unusable tolerances.
    pub fn validate(&self) -> Result<()> {
        self.tolerances.validate()
    }

    /// Rasterize one segment with the configured line strategy.
    #[must_use]
    pub fn rasterize_line(&self, segment: &dyn SegmentLike) -> Vec<Pixel> {
        log::trace!("rasterizing line with {}", self.line);
        self.line.rasterize(segment)
    }

    /// Rasterize one triangle with the configured triangle strategy.
    #[must_use]
    pub fn rasterize_triangle(&self, tri: &dyn TriangleLike) -> Vec<Pixel> {
        log::trace!("rasterizing triangle with {}", self.triangle);
        self.triangle.rasterize(tri, &self.tolerances)
    }

    /// Rasterize a batch of segments into one pixel list, in input order.
    pub fn rasterize_segments<I>(&self, segments: I) -> Vec<Pixel>
    where
        I: IntoIterator,
        I::Item: SegmentLike,
    {
        segments
            .into_iter()
            .flat_map(|segment| self.rasterize_line(&segment))
            .collect()
    }

    /// Rasterize a batch of triangles into one pixel list, in input order.
    ///
    /// Pixels on shared edges appear once per triangle that covers them.
    pub fn rasterize_triangles<I>(&self, triangles: I) -> Vec<Pixel>
    where
        I: IntoIterator,
        I::Item: TriangleLike,
    {
        triangles
            .into_iter()
            .flat_map(|tri| self.rasterize_triangle(&tri))
            .collect()
    }
}
