//! Geometry predicates used by the triangle rasterizers.
//!
//! Signed area, barycentric coordinates and the closed point-in-triangle
//! test, including the fallback that treats a zero-area triangle as the
//! segment between its two farthest-apart vertices.
//!
//! All tolerances assume screen-space pixel units. Use
//! [`Tolerances::scaled`] when working in another coordinate scale.

use std::ops::{Add, Mul};

use crate::error::{Error, Result};
use crate::geometry::{Point2, TriangleLike};

/// Signed-area magnitude below which a triangle is treated as degenerate.
pub const AREA_EPSILON: f32 = 1e-5;

/// Slack allowed in `|p - a| + |p - b| - |a - b|` for a point to count as
/// lying on the segment `a..b`.
pub const SEGMENT_EPSILON: f32 = 1e-3;

// ============================================================================
// Tolerances
// ============================================================================

/// Numeric tolerances for the degenerate-triangle handling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    /// Minimum `|signed area|` of a proper triangle.
    pub area_epsilon: f32,
    /// On-segment slack for the degenerate fallback.
    pub segment_epsilon: f32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            area_epsilon: AREA_EPSILON,
            segment_epsilon: SEGMENT_EPSILON,
        }
    }
}

impl Tolerances {
    /// Create validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if either value is NaN or
    /// infinite, if `area_epsilon` is not positive, or if `segment_epsilon`
    /// is negative.
    pub fn new(area_epsilon: f32, segment_epsilon: f32) -> Result<Self> {
        let tolerances = Self {
            area_epsilon,
            segment_epsilon,
        };
        tolerances.validate()?;
        Ok(tolerances)
    }

    /// Check both values are finite, `area_epsilon` is positive and
    /// `segment_epsilon` is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if !(self.area_epsilon.is_finite() && self.area_epsilon > 0.0) {
            return Err(Error::InvalidTolerance {
                name: "area_epsilon",
                value: self.area_epsilon,
            });
        }
        if !(self.segment_epsilon.is_finite() && self.segment_epsilon >= 0.0) {
            return Err(Error::InvalidTolerance {
                name: "segment_epsilon",
                value: self.segment_epsilon,
            });
        }
        Ok(())
    }

    /// Rescale for coordinates that are `factor` times larger than pixels.
    ///
    /// Area grows with the square of the scale, distances linearly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] when the rescaled values do not
    /// validate, e.g. for a zero, negative or overflowing `factor`.
    pub fn scaled(self, factor: f32) -> Result<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(Error::InvalidTolerance {
                name: "factor",
                value: factor,
            });
        }
        Self::new(
            self.area_epsilon * factor * factor,
            self.segment_epsilon * factor,
        )
    }
}

// ============================================================================
// Area and barycentric coordinates
// ============================================================================

/// Signed area of the triangle `a, b, c`.
///
/// The sign encodes the winding of the vertex order; only its consistency for
/// a given order is meaningful. Collinear or coincident input gives zero.
#[must_use]
pub fn signed_triangle_area(a: Point2, b: Point2, c: Point2) -> f32 {
    let x1 = c.x - a.x;
    let x2 = b.x - a.x;
    let y1 = b.y - a.y;
    let y2 = c.y - a.y;

    (x1 * y1) / 2.0 - (x2 * y2) / 2.0
}

/// Signed area of a triangle view.
#[must_use]
pub fn triangle_area(tri: &dyn TriangleLike) -> f32 {
    let [a, b, c] = tri.vertices();
    signed_triangle_area(a, b, c)
}

/// Barycentric weights of a point relative to a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Barycentric {
    /// Weight of vertex 0.
    pub a1: f32,
    /// Weight of vertex 1.
    pub a2: f32,
    /// Weight of vertex 2.
    pub a3: f32,
}

impl Barycentric {
    /// Create weights directly.
    #[must_use]
    pub const fn new(a1: f32, a2: f32, a3: f32) -> Self {
        Self { a1, a2, a3 }
    }

    /// Weights as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.a1, self.a2, self.a3]
    }

    /// Sum of the weights (1 for any point in the triangle's plane).
    #[must_use]
    pub fn sum(self) -> f32 {
        self.a1 + self.a2 + self.a3
    }

    /// True when every weight is non-negative.
    #[must_use]
    pub fn is_inside(self) -> bool {
        self.a1 >= 0.0 && self.a2 >= 0.0 && self.a3 >= 0.0
    }

    /// Blend per-vertex attributes with these weights.
    ///
    /// ```
    /// use trueno_raster::predicates::Barycentric;
    ///
    /// let w = Barycentric::new(0.5, 0.25, 0.25);
    /// assert_eq!(w.interpolate(4.0_f32, 8.0, 0.0), 4.0);
    /// ```
    #[must_use]
    pub fn interpolate<T>(self, v0: T, v1: T, v2: T) -> T
    where
        T: Add<Output = T> + Mul<f32, Output = T>,
    {
        v0 * self.a1 + v1 * self.a2 + v2 * self.a3
    }
}

/// Barycentric coordinates of `p` relative to `tri`.
///
/// Each weight is the signed area of the sub-triangle with one vertex
/// replaced by `p`, divided by the full signed area.
///
/// The triangle must not be degenerate: a zero area yields NaN or infinite
/// weights. Check with [`is_degenerate`] first or use
/// [`checked_barycentric`].
#[must_use]
pub fn barycentric_coordinates(p: Point2, tri: &dyn TriangleLike) -> Barycentric {
    let [v0, v1, v2] = tri.vertices();
    weights(p, [v0, v1, v2], signed_triangle_area(v0, v1, v2))
}

fn weights(p: Point2, [v0, v1, v2]: [Point2; 3], area: f32) -> Barycentric {
    Barycentric::new(
        signed_triangle_area(p, v1, v2) / area,
        signed_triangle_area(v0, p, v2) / area,
        signed_triangle_area(v0, v1, p) / area,
    )
}

/// Barycentric coordinates, or `None` when the triangle is degenerate.
#[must_use]
pub fn checked_barycentric(
    p: Point2,
    tri: &dyn TriangleLike,
    tolerances: &Tolerances,
) -> Option<Barycentric> {
    if is_degenerate(tri, tolerances) {
        return None;
    }
    Some(barycentric_coordinates(p, tri))
}

// ============================================================================
// Degeneracy
// ============================================================================

/// True when all three vertices are pairwise equal.
#[must_use]
pub fn is_coincident(tri: &dyn TriangleLike) -> bool {
    let [a, b, c] = tri.vertices();
    a == b && b == c && c == a
}

/// True when the triangle is coincident or its area is below tolerance.
///
/// A zero area is degenerate whatever `area_epsilon` holds.
#[must_use]
pub fn is_degenerate(tri: &dyn TriangleLike, tolerances: &Tolerances) -> bool {
    is_coincident(tri) || degenerate_area(triangle_area(tri), tolerances)
}

fn degenerate_area(area: f32, tolerances: &Tolerances) -> bool {
    area == 0.0 || area.abs() < tolerances.area_epsilon
}

/// The two vertices farthest apart, as `(i, j, distance)`.
///
/// Edges are compared in the order `0-1`, `1-2`, `2-0`; on a tie the edge
/// seen first is kept.
#[must_use]
pub fn farthest_pair(tri: &dyn TriangleLike) -> (usize, usize, f32) {
    let [p0, p1, p2] = tri.vertices();
    let edges = [
        (0, 1, p0.distance(p1)),
        (1, 2, p1.distance(p2)),
        (2, 0, p2.distance(p0)),
    ];

    let mut best = edges[0];
    for edge in &edges[1..] {
        if edge.2 > best.2 {
            best = *edge;
        }
    }
    best
}

// ============================================================================
// Membership
// ============================================================================

/// Closed point-in-triangle test with the default [`Tolerances`].
///
/// Edges and vertices count as inside, so triangles sharing an edge both
/// claim it.
#[must_use]
pub fn is_inside(p: Point2, tri: &dyn TriangleLike) -> bool {
    is_inside_with(p, tri, &Tolerances::default())
}

/// Closed point-in-triangle test.
///
/// Proper triangles use barycentric signs. Triangles with zero area, or area below
/// `tolerances.area_epsilon` are tested as the segment between their two
/// farthest-apart vertices (see [`farthest_pair`]), so slivers still cover
/// the pixels along their length.
#[must_use]
pub fn is_inside_with(p: Point2, tri: &dyn TriangleLike, tolerances: &Tolerances) -> bool {
    Membership::classify(tri, tolerances).contains(p)
}

/// A triangle classified once for repeated point-in-triangle queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Membership {
    /// Barycentric sign test against the precomputed signed area.
    Proper { vertices: [Point2; 3], area: f32 },
    /// Triangle-inequality test against the longest edge.
    Segment {
        a: Point2,
        b: Point2,
        length: f32,
        epsilon: f32,
    },
}

impl Membership {
    pub(crate) fn classify(tri: &dyn TriangleLike, tolerances: &Tolerances) -> Self {
        let vertices = tri.vertices();
        let [v0, v1, v2] = vertices;
        let area = signed_triangle_area(v0, v1, v2);

        if is_coincident(tri) || degenerate_area(area, tolerances) {
            let (i, j, length) = farthest_pair(tri);
            Self::Segment {
                a: vertices[i],
                b: vertices[j],
                length,
                epsilon: tolerances.segment_epsilon,
            }
        } else {
            Self::Proper { vertices, area }
        }
    }

    pub(crate) const fn is_degenerate(&self) -> bool {
        matches!(self, Self::Segment { .. })
    }

    pub(crate) fn contains(&self, p: Point2) -> bool {
        match *self {
            Self::Proper { vertices, area } => weights(p, vertices, area).is_inside(),
            Self::Segment {
                a,
                b,
                length,
                epsilon,
            } => (p.distance(a) + p.distance(b) - length).abs() < epsilon,
        }
    }
}
