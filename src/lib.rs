//! # Trueno-Raster
//!
//! CPU rasterization core: turns line segments and triangles into discrete
//! pixel coverage, and provides the geometric predicates (signed area,
//! barycentric coordinates, point-in-triangle) a shading stage needs.
//!
//! Input is already projected into pixel space. Output is a plain
//! `Vec<Pixel>` owned by the caller; depth testing, texturing, clipping and
//! framebuffer writes belong to the calling pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let tri = Triangle::new(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 4.0),
//! );
//!
//! let pixels = rasterize_triangle(&tri);
//! assert_eq!(pixels.len(), 15);
//!
//! let line = rasterize_line(&Line::from_coords(0.0, 0.0, 4.0, 0.0));
//! assert_eq!(line.len(), 5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the configuration types
//!
//! ## Degenerate Triangles
//!
//! The bounding-box strategy rasterizes zero-area triangles as the segment
//! between their farthest-apart vertices. The scanline strategy drops
//! triangles whose three vertices coincide. Both behaviours are kept under
//! their strategy names; see [`raster`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, pixels, segments, triangles).
pub mod geometry;

/// Signed area, barycentric coordinates and point-in-triangle tests.
pub mod predicates;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Line and triangle rasterizers.
pub mod raster;

/// Strategy selection and tolerances.
pub mod config;

/// Index-buffer primitive assembly.
pub mod assembly;

/// Pixel sinks and coverage counting.
pub mod coverage;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assembly::{assemble_segments, assemble_triangles, Topology};
    pub use crate::config::RasterConfig;
    pub use crate::coverage::{CoverageMask, PixelSink};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Line, Pixel, Point2, Point3, SegmentLike, Triangle, TriangleLike};
    pub use crate::predicates::{
        barycentric_coordinates, is_inside, signed_triangle_area, Barycentric, Tolerances,
    };
    pub use crate::raster::{rasterize_line, rasterize_triangle, LineAlgorithm, TriangleAlgorithm};
}
