//! Line segment rasterization.
//!
//! Three interchangeable strategies turn a segment into an ordered,
//! endpoint-inclusive list of pixels:
//!
//! - **Simple**: slope stepping along x. Only valid for shallow segments.
//! - **DDA**: symmetric floating-point stepping along the major axis.
//! - **Bresenham**: integer error accumulation on rounded endpoints.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::{Pixel, Point2, SegmentLike};

// ============================================================================
// Strategy selector
// ============================================================================

/// Line rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LineAlgorithm {
    /// `y = round(m·x + b)` for each integer x. Unsafe for steep segments.
    Simple,
    /// Digital differential analyzer; handles every slope.
    #[default]
    Dda,
    /// Integer Bresenham on the rounded endpoints.
    Bresenham,
}

impl LineAlgorithm {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 3] = [Self::Simple, Self::Dda, Self::Bresenham];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
        }
    }

    /// Rasterize a segment with this strategy.
    ///
    /// Bresenham rounds both endpoints to the nearest pixel first.
    #[must_use]
    pub fn rasterize(self, segment: &dyn SegmentLike) -> Vec<Pixel> {
        let [a, b] = segment.endpoints();
        match self {
            Self::Simple => simple(a, b),
            Self::Dda => dda(a, b),
            Self::Bresenham => bresenham(Pixel::from_point(a), Pixel::from_point(b)),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Rasterize a segment with the default strategy (DDA).
#[must_use]
pub fn rasterize_line(segment: &dyn SegmentLike) -> Vec<Pixel> {
    LineAlgorithm::default().rasterize(segment)
}

// ============================================================================
// Simple slope stepping
// ============================================================================

/// Slope-stepping rasterization.
///
/// Walks every integer x between the rounded endpoints (lowest first) and
/// emits `(x, round(m·x + b))`. Each column gets exactly one pixel, so steep
/// segments come out with gaps; vertical segments have no defined slope and
/// produce an unspecified result.
#[must_use]
pub fn simple(a: Point2, b: Point2) -> Vec<Pixel> {
    let d = b - a;
    if d.x.abs() < f32::EPSILON {
        log::warn!(
            "simple line rasterization of near-vertical segment {:?} -> {:?}",
            a,
            b
        );
    }

    let m = d.y / d.x;
    let intercept = a.y - m * a.x;

    let x0 = a.x.round() as i32;
    let x1 = b.x.round() as i32;

    (x0.min(x1)..=x0.max(x1))
        .map(|x| Pixel::new(x, (m * x as f32 + intercept).round() as i32))
        .collect()
}

// ============================================================================
// DDA
// ============================================================================

/// Digital differential analyzer.
///
/// Takes `ceil(delta) + 1` samples from `a` towards `b`, where `delta` is the
/// larger of `|dx|` and `|dy|`, and rounds each sample to the nearest pixel.
#[must_use]
pub fn dda(a: Point2, b: Point2) -> Vec<Pixel> {
    let dif = b - a;
    if !(dif.x.is_finite() && dif.y.is_finite()) {
        log::warn!("dda skipped non-finite segment {:?} -> {:?}", a, b);
        return Vec::new();
    }

    let delta = dif.x.abs().max(dif.y.abs());
    if delta == 0.0 {
        return vec![Pixel::from_point(a)];
    }

    let step = dif * (1.0 / delta);
    let steps = delta.ceil() as usize;

    let mut out = Vec::with_capacity(steps + 1);
    let mut p = a;
    for _ in 0..=steps {
        out.push(Pixel::from_point(p));
        p = p + step;
    }
    out
}

// ============================================================================
// Bresenham
// ============================================================================

/// Integer Bresenham rasterization between two pixels.
///
/// The walk always starts at the endpoint with the smaller x, so swapping
/// the endpoints yields the same pixel set. Deltas and the decision
/// variable are 64-bit, so any pair of `i32` endpoints is valid; the output
/// holds one pixel per major-axis step.
#[must_use]
pub fn bresenham(p0: Pixel, p1: Pixel) -> Vec<Pixel> {
    BresenhamWalk::new(p0, p1).collect()
}

/// Lazy Bresenham walk, one pixel per major-axis step.
#[derive(Debug, Clone)]
struct BresenhamWalk {
    origin: Pixel,
    /// Vertical direction, `1` or `-1`.
    sy: i64,
    /// Major axis is y.
    steep: bool,
    major: i64,
    minor: i64,
    d: i64,
    step: i64,
    offset: i64,
}

impl BresenhamWalk {
    fn new(p0: Pixel, p1: Pixel) -> Self {
        let (p0, p1) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
        let dx = i64::from(p1.x) - i64::from(p0.x);
        let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
        let steep = dy > dx;
        let (major, minor) = if steep { (dy, dx) } else { (dx, dy) };

        Self {
            origin: p0,
            sy: if p0.y <= p1.y { 1 } else { -1 },
            steep,
            major,
            minor,
            d: 2 * minor - major,
            step: 0,
            offset: 0,
        }
    }
}

impl Iterator for BresenhamWalk {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.step > self.major {
            return None;
        }

        let (ox, oy) = if self.steep {
            (self.offset, self.step)
        } else {
            (self.step, self.offset)
        };
        // Offsets never leave the box spanned by the endpoints.
        let pixel = Pixel::new(
            (i64::from(self.origin.x) + ox) as i32,
            (i64::from(self.origin.y) + self.sy * oy) as i32,
        );

        if self.d > 0 {
            self.offset += 1;
            self.d -= 2 * self.major;
        }
        self.d += 2 * self.minor;
        self.step += 1;

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.major - self.step + 1).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

// ============================================================================
// Tests
// ============================================================================
