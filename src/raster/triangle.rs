//! Triangle rasterization.
//!
//! Two interchangeable strategies emit the pixels whose centres lie inside a
//! triangle:
//!
//! - **Bounding box**: test every pixel centre of the integer bounding box
//!   with [`is_inside_with`](crate::predicates::is_inside_with). Degenerate triangles go through the segment
//!   fallback and still cover a one-pixel-wide line.
//! - **Scanline**: intersect each pixel row with the three edges and fill the
//!   span between the outermost crossings. Coincident triangles produce
//!   nothing; other degenerate triangles cover whatever their edges cross.
//!
//! Both emit pixels in row-major order. Edges are closed, so triangles that
//! share an edge both cover it.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::{Pixel, Point2, TriangleLike};
use crate::predicates::{is_coincident, Membership, Tolerances};

// ============================================================================
// Strategy selector
// ============================================================================

/// Triangle rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TriangleAlgorithm {
    /// Point test over the bounding box, with the degenerate fallback.
    #[default]
    BoundingBox,
    /// Row-by-row edge intersection.
    Scanline,
}

impl TriangleAlgorithm {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 2] = [Self::BoundingBox, Self::Scanline];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BoundingBox => "bounding-box",
            Self::Scanline => "scanline",
        }
    }

    /// Rasterize a triangle with this strategy.
    ///
    /// `tolerances` only affects the bounding-box strategy.
    #[must_use]
    pub fn rasterize(self, tri: &dyn TriangleLike, tolerances: &Tolerances) -> Vec<Pixel> {
        match self {
            Self::BoundingBox => bounding_box(tri, tolerances),
            Self::Scanline => scanline(tri),
        }
    }
}

impl fmt::Display for TriangleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TriangleAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Rasterize a triangle with the default strategy (bounding box) and
/// default tolerances.
#[must_use]
pub fn rasterize_triangle(tri: &dyn TriangleLike) -> Vec<Pixel> {
    TriangleAlgorithm::default().rasterize(tri, &Tolerances::default())
}

// ============================================================================
// Bounds
// ============================================================================

/// Inclusive range of pixel centres covered by a set of points' extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    /// Smallest pixel (`ceil` of the minimum coordinates).
    pub min: Pixel,
    /// Largest pixel (`floor` of the maximum coordinates).
    pub max: Pixel,
}

impl PixelBounds {
    /// Pixel centres inside the axis-aligned extent of `points`.
    ///
    /// Returns `None` for an empty slice or any non-finite coordinate.
    #[must_use]
    pub fn of(points: &[Point2]) -> Option<Self> {
        if points.is_empty() || points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return None;
        }

        let (mut lo, mut hi) = (points[0], points[0]);
        for p in &points[1..] {
            lo = Point2::new(lo.x.min(p.x), lo.y.min(p.y));
            hi = Point2::new(hi.x.max(p.x), hi.y.max(p.y));
        }

        Some(Self {
            min: Pixel::new(lo.x.ceil() as i32, lo.y.ceil() as i32),
            max: Pixel::new(hi.x.floor() as i32, hi.y.floor() as i32),
        })
    }

    /// True when no pixel centre falls inside.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Number of pixel centres inside.
    #[must_use]
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let w = i64::from(self.max.x) - i64::from(self.min.x) + 1;
        let h = i64::from(self.max.y) - i64::from(self.min.y) + 1;
        (w * h) as u64
    }

    /// Pixel centres in row-major order.
    pub fn pixels(self) -> impl Iterator<Item = Pixel> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Pixel::new(x, y)))
    }
}

// ============================================================================
// Bounding box + point test
// ============================================================================

/// Bounding-box rasterization.
///
/// Every pixel centre in `ceil(min)..=floor(max)` is tested with
/// [`is_inside_with`](crate::predicates::is_inside_with). The triangle is
/// classified once; cost then grows with the bounding box, not the triangle.
#[must_use]
pub fn bounding_box(tri: &dyn TriangleLike, tolerances: &Tolerances) -> Vec<Pixel> {
    let Some(bounds) = vertex_bounds(tri) else {
        return Vec::new();
    };

    let membership = Membership::classify(tri, tolerances);
    if membership.is_degenerate() {
        log::debug!(
            "rasterizing degenerate triangle {:?} as its longest edge",
            tri.vertices()
        );
    }

    bounds
        .pixels()
        .filter(|p| membership.contains(p.center()))
        .collect()
}

// ============================================================================
// Scanline
// ============================================================================

/// Scanline rasterization.
///
/// Coincident triangles yield nothing. For each row `y` in
/// `ceil(ymin)..=floor(ymax)` the span between the outermost edge crossings
/// is rounded inward and filled.
#[must_use]
pub fn scanline(tri: &dyn TriangleLike) -> Vec<Pixel> {
    if is_coincident(tri) {
        log::debug!("scanline skipped coincident triangle {:?}", tri.vertex(0));
        return Vec::new();
    }
    let Some(bounds) = vertex_bounds(tri) else {
        return Vec::new();
    };

    let [a, b, c] = tri.vertices();
    let mut out = Vec::new();
    for y in bounds.min.y..=bounds.max.y {
        if let Some((x0, x1)) = scanline_span(a, b, c, y) {
            out.extend((x0..=x1).map(|x| Pixel::new(x, y)));
        }
    }
    out
}

/// Inclusive pixel span of row `y` inside triangle `a, b, c`.
///
/// Collects the crossings of all three edges (a row through a vertex can
/// meet three of them), takes the outermost pair and rounds inward. Returns
/// `None` when no edge reaches the row or the rounded span is empty.
#[must_use]
pub fn scanline_span(a: Point2, b: Point2, c: Point2, y: i32) -> Option<(i32, i32)> {
    let row = y as f32;
    let mut span: Option<(f32, f32)> = None;

    let mut push = |x: f32| {
        span = Some(match span {
            Some((lo, hi)) => (lo.min(x), hi.max(x)),
            None => (x, x),
        });
    };

    for (p, q) in [(a, b), (b, c), (c, a)] {
        if !crosses(p, q, row) {
            continue;
        }
        if p.y == q.y {
            // Edge lies on the row: both endpoints bound the span.
            push(p.x);
            push(q.x);
        } else {
            push(crossing_x(p, q, row));
        }
    }

    let (lo, hi) = span?;
    let (x0, x1) = (lo.ceil() as i32, hi.floor() as i32);
    (x0 <= x1).then_some((x0, x1))
}

/// True when the row `y` lies between the edge's endpoint heights.
fn crosses(a: Point2, b: Point2, y: f32) -> bool {
    (b.y >= y && a.y <= y) || (b.y <= y && a.y >= y)
}

/// X where edge `a..b` meets row `y`; the edge must not be horizontal.
fn crossing_x(a: Point2, b: Point2, y: f32) -> f32 {
    ((b.x - a.x) * (y - a.y)) / (b.y - a.y) + a.x
}

fn vertex_bounds(tri: &dyn TriangleLike) -> Option<PixelBounds> {
    let bounds = PixelBounds::of(&tri.vertices());
    if bounds.is_none() {
        log::warn!("skipping triangle with non-finite vertices {:?}", tri.vertices());
    }
    bounds.filter(|b| !b.is_empty())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Triangle;
    use std::collections::HashSet;

    fn tri(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Triangle {
        Triangle::new(a.into(), b.into(), c.into())
    }

    fn set(pixels: Vec<Pixel>) -> HashSet<Pixel> {
        pixels.into_iter().collect()
    }

    #[test]
    fn test_right_triangle_bounding_box_exact() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        let out = bounding_box(&t, &Tolerances::default());

        let expected: HashSet<Pixel> = (0..=4)
            .flat_map(|y| (0..=4 - y).map(move |x| Pixel::new(x, y)))
            .collect();
        assert_eq!(out.len(), 15);
        assert_eq!(set(out), expected);
    }

    #[test]
    fn test_right_triangle_scanline_matches() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        assert_eq!(
            set(scanline(&t)),
            set(bounding_box(&t, &Tolerances::default()))
        );
    }

    #[test]
    fn test_row_major_order() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        for out in [scanline(&t), rasterize_triangle(&t)] {
            let mut sorted = out.clone();
            sorted.sort_by_key(|p| (p.y, p.x));
            assert_eq!(out, sorted);
        }
    }

    #[test]
    fn test_fractional_vertices_round_inward() {
        let t = tri((0.5, 0.5), (3.5, 0.5), (0.5, 3.5));
        let out = set(scanline(&t));
        // Row 1 spans x in [0.5, 3.0] -> pixels 1..=3.
        assert!(out.contains(&Pixel::new(1, 1)));
        assert!(out.contains(&Pixel::new(3, 1)));
        assert!(!out.contains(&Pixel::new(0, 1)));
        assert!(!out.contains(&Pixel::new(4, 1)));
        assert!(!out.iter().any(|p| p.y == 0));
        assert_eq!(out, set(bounding_box(&t, &Tolerances::default())));
    }

    #[test]
    fn test_coincident_scanline_empty() {
        let t = tri((2.0, 2.0), (2.0, 2.0), (2.0, 2.0));
        assert!(scanline(&t).is_empty());
    }

    #[test]
    fn test_coincident_bounding_box_single_pixel() {
        let t = tri((2.0, 2.0), (2.0, 2.0), (2.0, 2.0));
        assert_eq!(
            bounding_box(&t, &Tolerances::default()),
            vec![Pixel::new(2, 2)]
        );
    }

    #[test]
    fn test_collinear_bounding_box_is_a_line() {
        let t = tri((0.0, 0.0), (2.0, 0.0), (5.0, 0.0));
        let out = bounding_box(&t, &Tolerances::default());
        assert_eq!(out, (0..=5).map(|x| Pixel::new(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_collinear_horizontal_scanline_uses_edge_endpoints() {
        let t = tri((0.0, 0.0), (2.0, 0.0), (5.0, 0.0));
        assert_eq!(scanline(&t), (0..=5).map(|x| Pixel::new(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_diagonal_sliver_bounding_box() {
        let t = tri((0.0, 0.0), (1.0, 1.0), (3.0, 3.0));
        let out = bounding_box(&t, &Tolerances::default());
        assert_eq!(
            out,
            vec![
                Pixel::new(0, 0),
                Pixel::new(1, 1),
                Pixel::new(2, 2),
                Pixel::new(3, 3)
            ]
        );
    }

    #[test]
    fn test_horizontal_edge_on_row() {
        // Flat top at y = 0 and flat bottom at y = 4.
        let top = tri((0.0, 0.0), (6.0, 0.0), (3.0, 4.0));
        assert_eq!(scanline_span(top.points[0], top.points[1], top.points[2], 0), Some((0, 6)));
        assert_eq!(scanline_span(top.points[0], top.points[1], top.points[2], 4), Some((3, 3)));
        assert_eq!(set(scanline(&top)), set(bounding_box(&top, &Tolerances::default())));
    }

    #[test]
    fn test_span_outside_rows() {
        let t = tri((0.0, 0.0), (6.0, 0.0), (3.0, 4.0));
        assert_eq!(scanline_span(t.points[0], t.points[1], t.points[2], 5), None);
        assert_eq!(scanline_span(t.points[0], t.points[1], t.points[2], -1), None);
    }

    #[test]
    fn test_thin_triangle_between_centres() {
        // No pixel centre lies inside.
        let t = tri((0.2, 0.2), (0.8, 0.2), (0.5, 0.8));
        assert!(bounding_box(&t, &Tolerances::default()).is_empty());
        assert!(scanline(&t).is_empty());
    }

    #[test]
    fn test_non_finite_vertices_skipped() {
        let t = tri((0.0, 0.0), (f32::INFINITY, 0.0), (0.0, 4.0));
        assert!(bounding_box(&t, &Tolerances::default()).is_empty());
        assert!(scanline(&t).is_empty());
    }

    #[test]
    fn test_shared_edge_double_coverage() {
        let left = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        let right = tri((4.0, 0.0), (4.0, 4.0), (0.0, 4.0));
        let a = set(rasterize_triangle(&left));
        let b = set(rasterize_triangle(&right));
        let shared: HashSet<_> = a.intersection(&b).copied().collect();
        let diagonal: HashSet<_> = (0..=4).map(|x| Pixel::new(x, 4 - x)).collect();
        assert_eq!(shared, diagonal);
    }

    #[test]
    fn test_pixel_bounds() {
        let bounds = PixelBounds::of(&[Point2::new(0.5, -1.2), Point2::new(3.0, 2.9)])
            .expect("finite points have bounds");
        assert_eq!(bounds.min, Pixel::new(1, -1));
        assert_eq!(bounds.max, Pixel::new(3, 2));
        assert_eq!(bounds.area(), 12);
        assert_eq!(bounds.pixels().count(), 12);
        assert!(PixelBounds::of(&[]).is_none());

        let empty = PixelBounds::of(&[Point2::new(0.2, 0.2), Point2::new(0.8, 0.8)])
            .expect("finite points have bounds");
        assert!(empty.is_empty());
        assert_eq!(empty.area(), 0);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("scanline".parse::<TriangleAlgorithm>(), Ok(TriangleAlgorithm::Scanline));
        assert_eq!("bounding_box".parse::<TriangleAlgorithm>(), Ok(TriangleAlgorithm::BoundingBox));
        assert_eq!(TriangleAlgorithm::BoundingBox.to_string(), "bounding-box");
        assert!("edge-function".parse::<TriangleAlgorithm>().is_err());
    }
}
