//! Error types for trueno-raster operations.
//!
//! Degenerate geometry is never an error; these variants cover configuration
//! and primitive-assembly input only.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A tolerance was negative, NaN or infinite.
    #[error("Invalid tolerance {name}: {value}")]
    InvalidTolerance {
        /// Tolerance name.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },

    /// Algorithm name that matches no strategy.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Index buffer entry pointing past the vertex slice.
    #[error("Index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds {
        /// Offending index.
        index: u32,
        /// Number of vertices available.
        len: usize,
    },

    /// Topology used with the wrong assembler.
    #[error("Topology {topology} cannot produce {expected}")]
    TopologyMismatch {
        /// Topology name.
        topology: &'static str,
        /// Primitive kind the caller asked for.
        expected: &'static str,
    },

    /// Invalid dimensions for a coverage mask.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
