//! Rasterization of line segments and triangles.
//!
//! Every function here is pure: it reads the input geometry and returns a
//! fresh `Vec<Pixel>`. Strategy enums ([`LineAlgorithm`],
//! [`TriangleAlgorithm`]) select between the interchangeable algorithms.
//!
//! # Algorithms
//!
//! - **Simple**: slope stepping for shallow segments
//! - **DDA**: digital differential analyzer, any slope
//! - **Bresenham's Line**: integer-only error accumulation
//! - **Bounding box**: per-pixel point-in-triangle test
//! - **Scanline**: per-row edge intersection
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pineda, J. (1988). "A Parallel Algorithm for Polygon Rasterization." SIGGRAPH '88.

mod line;
mod triangle;

pub use line::{bresenham, dda, rasterize_line, simple, LineAlgorithm};
pub use triangle::{
    bounding_box, rasterize_triangle, scanline, scanline_span, PixelBounds, TriangleAlgorithm,
};
