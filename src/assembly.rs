//! Primitive assembly from index buffers.
//!
//! Groups an index buffer over a vertex slice into the triangles or segments
//! the rasterizers consume.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::{Line, Point2, Triangle};

/// How consecutive indices form primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Topology {
    /// Independent triples.
    Triangles,
    /// Each index after the second closes a triangle with the previous two.
    TriangleStrip,
    /// Every triangle shares the first index.
    TriangleFan,
    /// Independent pairs.
    Lines,
    /// Each index after the first closes a segment with the previous one.
    LineStrip,
    /// A line strip that also joins the last index back to the first.
    LineLoop,
}

impl Topology {
    /// Stable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triangles => "triangles",
            Self::TriangleStrip => "triangle-strip",
            Self::TriangleFan => "triangle-fan",
            Self::Lines => "lines",
            Self::LineStrip => "line-strip",
            Self::LineLoop => "line-loop",
        }
    }

    /// True for the three triangle topologies.
    #[must_use]
    pub const fn is_triangles(self) -> bool {
        matches!(self, Self::Triangles | Self::TriangleStrip | Self::TriangleFan)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assemble triangles from an index buffer.
///
/// Strips flip every odd triangle's first two vertices so the whole strip
/// keeps the winding of its first triangle. Indices that do not complete a
/// primitive are ignored.
///
/// # Errors
///
/// Returns [`Error::TopologyMismatch`] for line topologies and
/// [`Error::IndexOutOfBounds`] for an index past the end of `vertices`.
///
/// # Example
///
/// ```
/// use trueno_raster::assembly::{assemble_triangles, Topology};
/// use trueno_raster::geometry::Point2;
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 4.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
/// ];
/// let tris = assemble_triangles(Topology::TriangleStrip, &[0, 1, 2, 3], &points).unwrap();
/// assert_eq!(tris.len(), 2);
/// ```
pub fn assemble_triangles(
    topology: Topology,
    indices: &[u32],
    vertices: &[Point2],
) -> Result<Vec<Triangle>> {
    let triangle = |a: u32, b: u32, c: u32| -> Result<Triangle> {
        Ok(Triangle::new(
            fetch(vertices, a)?,
            fetch(vertices, b)?,
            fetch(vertices, c)?,
        ))
    };

    match topology {
        Topology::Triangles => indices
            .chunks_exact(3)
            .map(|t| triangle(t[0], t[1], t[2]))
            .collect(),
        Topology::TriangleStrip => indices
            .windows(3)
            .enumerate()
            .map(|(n, t)| {
                if n % 2 == 0 {
                    triangle(t[0], t[1], t[2])
                } else {
                    triangle(t[1], t[0], t[2])
                }
            })
            .collect(),
        Topology::TriangleFan => {
            let Some((&hub, rest)) = indices.split_first() else {
                return Ok(Vec::new());
            };
            rest.windows(2).map(|t| triangle(hub, t[0], t[1])).collect()
        }
        Topology::Lines | Topology::LineStrip | Topology::LineLoop => {
            Err(Error::TopologyMismatch {
                topology: topology.name(),
                expected: "triangles",
            })
        }
    }
}

/// Assemble line segments from an index buffer.
///
/// A loop over more than two indices gains a closing segment from the last
/// index back to the first.
///
/// # Errors
///
/// Returns [`Error::TopologyMismatch`] for triangle topologies and
/// [`Error::IndexOutOfBounds`] for an index past the end of `vertices`.
pub fn assemble_segments(
    topology: Topology,
    indices: &[u32],
    vertices: &[Point2],
) -> Result<Vec<Line>> {
    let segment = |a: u32, b: u32| -> Result<Line> {
        Ok(Line::new(fetch(vertices, a)?, fetch(vertices, b)?))
    };

    match topology {
        Topology::Lines => indices.chunks_exact(2).map(|s| segment(s[0], s[1])).collect(),
        Topology::LineStrip => indices.windows(2).map(|s| segment(s[0], s[1])).collect(),
        Topology::LineLoop => {
            let mut lines: Vec<Line> =
                indices.windows(2).map(|s| segment(s[0], s[1])).collect::<Result<_>>()?;
            if indices.len() > 2 {
                lines.push(segment(indices[indices.len() - 1], indices[0])?);
            }
            Ok(lines)
        }
        Topology::Triangles | Topology::TriangleStrip | Topology::TriangleFan => {
            Err(Error::TopologyMismatch {
                topology: topology.name(),
                expected: "segments",
            })
        }
    }
}

fn fetch(vertices: &[Point2], index: u32) -> Result<Point2> {
    vertices
        .get(index as usize)
        .copied()
        .ok_or(Error::IndexOutOfBounds {
            index,
            len: vertices.len(),
        })
}
