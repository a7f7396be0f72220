//! Error types
//!
//! Every variant is a caller contract violation caught at the boundary
//! of the offending operation. Nothing is retried internally and a
//! failed operation leaves no partial state behind.

use thiserror::Error;

/// Errors reported by matrix, noise, and terrain operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Two matrices had incompatible shapes for the requested operation
    #[error("dimension mismatch: {lhs_rows}x{lhs_cols} against {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// A matrix element access fell outside the matrix shape
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Matrix storage length did not match the requested shape
    #[error("data length {len} does not match {rows}x{cols}")]
    DataLength { len: usize, rows: usize, cols: usize },

    /// Noise layer parameter lists disagreed in length
    #[error("{intervals} gradient intervals against {amplitudes} amplitudes")]
    ConfigMismatch { intervals: usize, amplitudes: usize },
}
