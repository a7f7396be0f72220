//! Dense row-major matrix
//!
//! Small value-semantics matrix used for gradient grids, height
//! fields, and the projection transform. Every operation returns a
//! new matrix; nothing mutates in place.

use core::ops::Index;

use crate::error::Error;

/// A dense `rows x cols` matrix of `f32` values in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Wrap existing row-major storage; the length must match the shape
    pub fn from_vec(data: Vec<f32>, rows: usize, cols: usize) -> Result<Self, Error> {
        if data.len() != rows * cols {
            return Err(Error::DataLength {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix by evaluating `f` at every `(row, col)` position
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// A matrix with every element set to `value`
    pub fn filled(rows: usize, cols: usize, value: f32) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// A single-column matrix holding `v`
    pub fn column(v: &[f32]) -> Self {
        Self {
            data: v.to_vec(),
            rows: v.len(),
            cols: 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of the element storage
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Checked element access
    pub fn get(&self, row: usize, col: usize) -> Result<f32, Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Standard matrix product; requires `self.cols == other.rows`
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, Error> {
        if self.cols != other.rows {
            return Err(self.shape_mismatch(other));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut v = 0.0;
                for k in 0..self.cols {
                    v += self[(i, k)] * other[(k, j)];
                }
                data.push(v);
            }
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Elementwise transform into a new matrix of the same shape
    pub fn map<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f32) -> f32,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Elementwise combination of two equal-shaped matrices
    pub fn map_pairwise<F>(&self, mut f: F, other: &Matrix) -> Result<Matrix, Error>
    where
        F: FnMut(f32, f32) -> f32,
    {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.shape_mismatch(other));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn shape_mismatch(&self, other: &Matrix) -> Error {
        Error::DimensionMismatch {
            lhs_rows: self.rows,
            lhs_cols: self.cols,
            rhs_rows: other.rows,
            rhs_cols: other.cols,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    /// Unchecked-shape access for in-bounds-by-construction loops.
    /// Panics outside the shape; use [`Matrix::get`] at API boundaries.
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.data[row * self.cols + col]
    }
}
