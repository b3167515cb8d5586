//! Geometric primitives for rasterization.
//!
//! Provides the value types the rasterizers consume ([`Point2`], [`Point3`],
//! [`Line`], [`Triangle`]) and produce ([`Pixel`]), plus the vertex-view
//! traits [`SegmentLike`] and [`TriangleLike`] that let callers hand in their
//! own vertex storage.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

// ============================================================================
// Points
// ============================================================================

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point2 {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the point taken as a vector.
    #[must_use]
    pub fn norm(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).norm()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Point2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Point2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A 3D point, typically a projected vertex whose `z` carries depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point3 {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Drop the `z` component.
    #[must_use]
    pub const fn xy(self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Euclidean length of the point taken as a vector.
    #[must_use]
    pub fn norm(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// ============================================================================
// Pixel
// ============================================================================

/// A discrete raster cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pixel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Nearest pixel to a continuous point (halves round away from zero).
    #[must_use]
    pub fn from_point(p: Point2) -> Self {
        Self::new(p.x.round() as i32, p.y.round() as i32)
    }

    /// The pixel center as a continuous point.
    #[must_use]
    pub fn center(self) -> Point2 {
        Point2::new(self.x as f32, self.y as f32)
    }

    /// Swap the roles of the two axes.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for Pixel {
    fn from(p: Point2) -> Self {
        Self::from_point(p)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ============================================================================
// Vertex views
// ============================================================================

/// Read-only view over the two endpoints of a segment.
///
/// Implementors must answer `endpoint(0)` and `endpoint(1)`; any other index
/// is a caller bug and may panic.
pub trait SegmentLike {
    /// Endpoint `index` (0 or 1).
    fn endpoint(&self, index: usize) -> Point2;

    /// Both endpoints as an array.
    fn endpoints(&self) -> [Point2; 2] {
        [self.endpoint(0), self.endpoint(1)]
    }
}

/// Read-only view over the three vertices of a triangle.
///
/// Implementors must answer `vertex(0)`, `vertex(1)` and `vertex(2)`; any
/// other index is a caller bug and may panic.
pub trait TriangleLike {
    /// Vertex `index` (0, 1 or 2).
    fn vertex(&self, index: usize) -> Point2;

    /// All three vertices as an array.
    fn vertices(&self) -> [Point2; 3] {
        [self.vertex(0), self.vertex(1), self.vertex(2)]
    }
}

impl<T: SegmentLike + ?Sized> SegmentLike for &T {
    fn endpoint(&self, index: usize) -> Point2 {
        (**self).endpoint(index)
    }
}

impl<T: TriangleLike + ?Sized> TriangleLike for &T {
    fn vertex(&self, index: usize) -> Point2 {
        (**self).vertex(index)
    }
}

impl SegmentLike for [Point2; 2] {
    fn endpoint(&self, index: usize) -> Point2 {
        self[index]
    }
}

impl SegmentLike for (Point2, Point2) {
    fn endpoint(&self, index: usize) -> Point2 {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("segment endpoint index {index} out of range"),
        }
    }
}

impl TriangleLike for [Point2; 3] {
    fn vertex(&self, index: usize) -> Point2 {
        self[index]
    }
}

impl TriangleLike for [Point3; 3] {
    fn vertex(&self, index: usize) -> Point2 {
        self[index].xy()
    }
}

impl TriangleLike for (Point2, Point2, Point2) {
    fn vertex(&self, index: usize) -> Point2 {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("triangle vertex index {index} out of range"),
        }
    }
}

// ============================================================================
// Line / Triangle
// ============================================================================

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point2,
    /// End point.
    pub end: Point2,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// The same segment walked the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl SegmentLike for Line {
    fn endpoint(&self, index: usize) -> Point2 {
        match index {
            0 => self.start,
            1 => self.end,
            _ => panic!("segment endpoint index {index} out of range"),
        }
    }
}

/// A triangle stored by value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    /// Vertices in caller order (the order fixes the winding).
    pub points: [Point2; 3],
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { points: [a, b, c] }
    }

    /// Copy the vertices out of any triangle view.
    #[must_use]
    pub fn from_view(view: &dyn TriangleLike) -> Self {
        Self { points: view.vertices() }
    }

    /// Arithmetic mean of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let [a, b, c] = self.points;
        let sum = a + b + c;
        Point2::new(sum.x / 3.0, sum.y / 3.0)
    }
}

impl TriangleLike for Triangle {
    fn vertex(&self, index: usize) -> Point2 {
        self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_point_lerp() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(10.0, 10.0);
        let mid = p1.lerp(p2, 0.5);
        assert!((mid.x - 5.0).abs() < 0.001);
        assert!((mid.y - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(3.0, -1.0);
        assert_eq!(a + b, Point2::new(4.0, 1.0));
        assert_eq!(a - b, Point2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
        assert_eq!(-a, Point2::new(-1.0, -2.0));
    }

    #[test]
    fn test_point3_xy() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.xy(), Point2::new(1.0, 2.0));
        assert_eq!(p - p, Point3::default());
    }

    #[test]
    fn test_pixel_rounding() {
        assert_eq!(Pixel::from_point(Point2::new(1.4, 1.6)), Pixel::new(1, 2));
        assert_eq!(Pixel::from_point(Point2::new(-0.5, 2.5)), Pixel::new(-1, 3));
        assert_eq!(Pixel::new(3, 4).center(), Point2::new(3.0, 4.0));
        assert_eq!(Pixel::new(3, 4).transposed(), Pixel::new(4, 3));
    }

    #[test]
    fn test_line_length() {
        let line = Line::from_coords(0.0, 0.0, 3.0, 4.0);
        assert!((line.length() - 5.0).abs() < 0.001);
        assert_eq!(line.reversed().start, Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_views_agree() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);

        let tri = Triangle::new(a, b, c);
        let arr = [a, b, c];
        let tuple = (a, b, c);

        assert_eq!(tri.vertices(), arr.vertices());
        assert_eq!(tuple.vertices(), arr.vertices());
        assert_eq!(Triangle::from_view(&tuple), tri);

        let line = Line::new(a, b);
        assert_eq!(line.endpoints(), [a, b].endpoints());
        assert_eq!((a, b).endpoints(), [a, b]);
    }

    #[test]
    fn test_point3_triangle_view_drops_depth() {
        let tri = [
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, 6.0),
            Point3::new(0.0, 1.0, 7.0),
        ];
        assert_eq!(tri.vertex(2), Point2::new(0.0, 1.0));
    }

    #[test]
    fn test_centroid() {
        let tri = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 3.0),
        );
        assert_eq!(tri.centroid(), Point2::new(1.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_tuple_view_rejects_bad_index() {
        let tuple = (Point2::ORIGIN, Point2::ORIGIN, Point2::ORIGIN);
        let _ = tuple.vertex(3);
    }
}
